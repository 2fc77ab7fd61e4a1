//! Data contracts exchanged at the system boundary
//!
//! Each contract is a typed record paired with the [`Schema`](crate::Schema)
//! the validation layer checks raw payloads against.

pub mod dashboard;
pub mod post;
pub mod settings;
pub mod user;

// Re-export for convenience
pub use dashboard::Dashboard;
pub use post::{CreatePost, Post, PostStatus};
pub use settings::Settings;
pub use user::{CreateUser, Role, User};
