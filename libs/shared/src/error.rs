//! Custom error types for the shared library
//!
//! [`ApiError`] is what route handlers return; it renders as a failed
//! [`ApiResponse`] envelope with a matching status code.

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

use crate::{response::ApiResponse, validation::ValidationFailure};

/// Error type returned by route handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Payload does not conform to its contract
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Request body could not be read; keeps the extractor's status, e.g.
    /// 400 for malformed JSON or 415 for a missing JSON content type
    #[error("Request rejected: {message}")]
    Rejected { status: StatusCode, message: String },

    /// No record or route for the requested identifier
    #[error("Not found: {0}")]
    NotFound(String),

    /// Anything else; details are logged, never returned
    #[error("Internal server error")]
    InternalServerError,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected { status, .. } => *status,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        let body = match self {
            ApiError::Validation(failure) => {
                ApiResponse::<()>::failure(message).with_issues(failure.issues)
            }
            _ => ApiResponse::<()>::failure(message),
        };

        (status, body).into_response()
    }
}

/// Type alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;

/// Fallback handler for unmatched routes
pub async fn not_found(uri: Uri) -> ApiError {
    warn!("No route for {}", uri.path());
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Error raised while loading service configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldIssue;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn render(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_lists_issues() {
        let failure = ValidationFailure::new(
            "CreatePost",
            vec![
                FieldIssue::new("title", "at least 5 character(s)", None),
                FieldIssue::new("content", "at least 10 character(s)", None),
            ],
        );

        let (status, body) = render(ApiError::from(failure)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], Value::Bool(false));
        assert!(body.get("data").is_none());
        assert_eq!(body["issues"][0]["field"], "title");
        assert_eq!(body["issues"][1]["field"], "content");
    }

    #[tokio::test]
    async fn test_rejection_keeps_its_status() {
        let error = ApiError::Rejected {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".to_string(),
        };

        let (status, body) = render(error).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["success"], Value::Bool(false));
        assert!(body["error"].as_str().unwrap().starts_with("Request rejected:"));
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let (status, body) = render(ApiError::InternalServerError).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert!(body.get("issues").is_none());
    }

    #[tokio::test]
    async fn test_not_found_fallback() {
        let error = not_found(Uri::from_static("/nowhere")).await;
        let (status, body) = render(error).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found: no route for /nowhere");
    }
}
