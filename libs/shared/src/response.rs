//! Uniform response envelope
//!
//! Every route answers with an [`ApiResponse`]. A successful envelope only
//! ever carries `data`; a failed one only ever carries `error` and, for
//! validation failures, the list of field issues.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{utils::current_timestamp, validation::FieldIssue};

/// Envelope wrapped around every endpoint result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    issues: Vec<FieldIssue>,
    timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Build an envelope stamped with the current time
    ///
    /// `data` is dropped on failure and `error` is dropped on success.
    pub fn new(success: bool, data: Option<T>, error: Option<String>) -> Self {
        let (data, error) = if success { (data, None) } else { (None, error) };
        Self {
            success,
            data,
            error,
            issues: Vec::new(),
            timestamp: current_timestamp(),
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new(true, Some(data), None)
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::new(false, None, Some(error.into()))
    }

    /// Attach field issues; ignored on a successful envelope
    pub fn with_issues(mut self, issues: Vec<FieldIssue>) -> Self {
        if !self.success {
            self.issues = issues;
        }
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
