//! Settings contract

use serde::{Deserialize, Serialize};

use crate::schema::{Constraint, Contract, Field, FieldKind, Schema};

/// Site-wide settings managed through the admin API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub maintenance_mode: bool,
    /// Free-form size such as `100MB`; the format is not checked
    pub max_upload_size: String,
    pub api_rate_limit: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            maintenance_mode: false,
            max_upload_size: "100MB".to_string(),
            api_rate_limit: 100.0,
        }
    }
}

impl Contract for Settings {
    const SCHEMA: Schema = Schema {
        name: "Settings",
        fields: &[
            Field::required("maintenance_mode", FieldKind::Boolean),
            Field::required("max_upload_size", FieldKind::String),
            Field::required("api_rate_limit", FieldKind::Number).with(&[Constraint::Minimum(1.0)]),
        ],
    };
}
