//! Validating request extractor

use axum::{
    Json, async_trait,
    extract::{FromRequest, Request},
};
use serde_json::Value;
use tracing::debug;

use crate::{error::ApiError, schema::Contract, validation::validate};

/// JSON body checked against its contract before reaching the handler
///
/// An unreadable body is rejected as [`ApiError::Rejected`] with axum's own
/// status; a body that parses but does not conform is rejected as
/// [`ApiError::Validation`].
#[derive(Debug, Clone)]
pub struct Valid<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Valid<T>
where
    T: Contract + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!("Rejected request body: {}", rejection.body_text());
                ApiError::Rejected {
                    status: rejection.status(),
                    message: rejection.body_text(),
                }
            })?;

        Ok(Valid(validate::<T>(&payload)?))
    }
}
