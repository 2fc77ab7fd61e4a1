//! Dashboard contract

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{Constraint, Contract, Field, FieldKind, Schema};

/// Headline counters shown on the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub users: u64,
    pub posts: u64,
    pub visits_today: u64,
    pub last_updated: DateTime<Utc>,
}

impl Contract for Dashboard {
    const SCHEMA: Schema = Schema {
        name: "Dashboard",
        fields: &[
            Field::required("users", FieldKind::Integer).with(&[Constraint::Minimum(0.0)]),
            Field::required("posts", FieldKind::Integer).with(&[Constraint::Minimum(0.0)]),
            Field::required("visits_today", FieldKind::Integer).with(&[Constraint::Minimum(0.0)]),
            Field::required("last_updated", FieldKind::Timestamp),
        ],
    };
}
