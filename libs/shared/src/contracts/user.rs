//! User contract and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::{
    schema::{Constraint, Contract, Field, FieldKind, Schema},
    utils::{current_timestamp, generate_id},
};

/// Accepted role names, in declaration order
pub const ROLES: &[&str] = &["admin", "user", "moderator"];

const NAME: Field =
    Field::required("name", FieldKind::String).with(&[Constraint::MinLength(1), Constraint::MaxLength(100)]);
const EMAIL: Field = Field::required("email", FieldKind::String).with(&[Constraint::Email]);

/// Role granted to a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
    Moderator,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Moderator => "moderator",
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contract for User {
    const SCHEMA: Schema = Schema {
        name: "User",
        fields: &[
            Field::required("id", FieldKind::String).with(&[Constraint::Uuid]),
            NAME,
            EMAIL,
            Field::required("role", FieldKind::String).with(&[Constraint::OneOf(ROLES)]),
            Field::required("created_at", FieldKind::Timestamp),
            Field::required("updated_at", FieldKind::Timestamp),
        ],
    };
}

/// New user creation payload
///
/// `role` falls back to [`Role::User`] when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "role_or_default")]
    pub role: Role,
}

fn role_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Role, D::Error> {
    Option::<Role>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Contract for CreateUser {
    const SCHEMA: Schema = Schema {
        name: "CreateUser",
        fields: &[
            NAME,
            EMAIL,
            Field::optional("role", FieldKind::String).with(&[Constraint::OneOf(ROLES)]),
        ],
    };
}

impl CreateUser {
    /// Build the full user, assigning id and timestamps
    pub fn into_user(self) -> User {
        let now = current_timestamp();
        User {
            id: generate_id(),
            name: self.name,
            email: self.email,
            role: self.role,
            created_at: now,
            updated_at: now,
        }
    }
}
