//! Shared library for the starter workspace
//!
//! This crate provides the pieces both HTTP services agree on: the data
//! contracts exchanged at the system boundary, the declarative validation
//! layer that checks raw payloads against them, the uniform response
//! envelope, and the ambient plumbing (errors, configuration, logging,
//! in-memory stores).

pub mod config;
pub mod contracts;
pub mod error;
pub mod extract;
pub mod logging;
pub mod response;
pub mod schema;
pub mod store;
pub mod utils;
pub mod validation;

pub use error::{ApiError, ApiResult};
pub use extract::Valid;
pub use response::ApiResponse;
pub use schema::{Contract, Schema};
pub use validation::{FieldIssue, ValidationFailure, check, validate};

/// Example usage of the validation layer
///
/// ```rust
/// use shared::{contracts::CreateUser, validate};
/// use serde_json::json;
///
/// let payload = json!({ "name": "Eve", "email": "eve@example.com" });
/// let user: CreateUser = validate(&payload).unwrap();
/// assert_eq!(user.name, "Eve");
///
/// let failure = validate::<CreateUser>(&json!({ "name": "" })).unwrap_err();
/// assert!(failure.mentions("name"));
/// assert!(failure.mentions("email"));
/// ```
pub fn example_usage() {}
