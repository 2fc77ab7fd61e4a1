//! Request payload validation
//!
//! [`check`] walks a [`Schema`] against an untyped JSON payload and collects
//! every violated constraint. [`validate`] does the same for a [`Contract`]
//! and, when nothing is violated, returns the typed value. Unknown fields in
//! the payload are ignored and never reach the typed value.

use std::sync::OnceLock;

use chrono::DateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::schema::{Constraint, Contract, Field, FieldKind, Schema};

/// Path used for issues that concern the payload as a whole
pub const ROOT: &str = "$";

/// One violated constraint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Name of the offending field, or `$` for the whole payload
    pub field: String,
    /// What the field was expected to be
    pub expected: String,
    /// The value found, absent when the field was missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, expected: impl Into<String>, actual: Option<&Value>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.cloned(),
        }
    }
}

/// Every reason a payload did not conform to its contract
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {schema} payload: {} issue(s)", .issues.len())]
pub struct ValidationFailure {
    pub schema: &'static str,
    pub issues: Vec<FieldIssue>,
}

impl ValidationFailure {
    pub fn new(schema: &'static str, issues: Vec<FieldIssue>) -> Self {
        Self { schema, issues }
    }

    /// Names of the offending fields, deduplicated, in report order
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::with_capacity(self.issues.len());
        for issue in &self.issues {
            if !fields.contains(&issue.field.as_str()) {
                fields.push(issue.field.as_str());
            }
        }
        fields
    }

    /// Whether any issue names the given field
    pub fn mentions(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

/// Validate a payload against a contract and produce the typed value
pub fn validate<T: Contract>(payload: &Value) -> Result<T, ValidationFailure> {
    let schema = T::SCHEMA;
    let issues = check(&schema, payload);
    if !issues.is_empty() {
        debug!(
            schema = schema.name,
            issues = issues.len(),
            "payload rejected by validation"
        );
        return Err(ValidationFailure::new(schema.name, issues));
    }

    T::deserialize(payload).map_err(|e| {
        ValidationFailure::new(schema.name, vec![FieldIssue::new(ROOT, e.to_string(), None)])
    })
}

/// Collect every issue of a payload against a schema
///
/// Returns an empty list when the payload conforms. Issues are reported in
/// schema field order.
pub fn check(schema: &Schema, payload: &Value) -> Vec<FieldIssue> {
    let Some(object) = payload.as_object() else {
        return vec![FieldIssue::new(ROOT, "JSON object", Some(payload))];
    };

    schema
        .fields
        .iter()
        .flat_map(|field| check_field(field, object))
        .collect()
}

fn check_field(field: &Field, object: &Map<String, Value>) -> Vec<FieldIssue> {
    let value = match object.get(field.name) {
        None | Some(Value::Null) if field.required => {
            return vec![FieldIssue::new(
                field.name,
                format!("required {}", field.kind.describe()),
                None,
            )];
        }
        None | Some(Value::Null) => return Vec::new(),
        Some(value) => value,
    };

    if !kind_matches(field.kind, value) {
        return vec![FieldIssue::new(field.name, field.kind.describe(), Some(value))];
    }

    field
        .constraints
        .iter()
        .filter(|constraint| !constraint_holds(constraint, value))
        .map(|constraint| FieldIssue::new(field.name, describe(constraint), Some(value)))
        .collect()
}

fn kind_matches(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::String => value.is_string(),
        FieldKind::Number => value.is_number(),
        FieldKind::Integer => value.is_i64() || value.is_u64(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Timestamp => value
            .as_str()
            .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok()),
    }
}

fn constraint_holds(constraint: &Constraint, value: &Value) -> bool {
    match *constraint {
        Constraint::MinLength(min) => value.as_str().is_some_and(|s| s.chars().count() >= min),
        Constraint::MaxLength(max) => value.as_str().is_some_and(|s| s.chars().count() <= max),
        Constraint::Minimum(min) => value.as_f64().is_some_and(|n| n >= min),
        Constraint::OneOf(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
        Constraint::Uuid => value.as_str().is_some_and(is_uuid),
        Constraint::Email => value.as_str().is_some_and(is_email),
    }
}

fn describe(constraint: &Constraint) -> String {
    match constraint {
        Constraint::MinLength(min) => format!("at least {min} character(s)"),
        Constraint::MaxLength(max) => format!("at most {max} character(s)"),
        Constraint::Minimum(min) => format!("number >= {min}"),
        Constraint::OneOf(allowed) => format!("one of: {}", allowed.join(", ")),
        Constraint::Uuid => "valid UUID".to_string(),
        Constraint::Email => "valid email address".to_string(),
    }
}

/// Whether a string is a hyphenated UUID
pub fn is_uuid(value: &str) -> bool {
    static UUID_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = UUID_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
            .expect("Failed to compile UUID regex")
    });

    regex.is_match(value)
}

/// Whether a string is a syntactically valid email address
pub fn is_email(value: &str) -> bool {
    if value.len() > 254 {
        return false;
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    regex.is_match(value)
}
