//! Post contract and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    schema::{Constraint, Contract, Field, FieldKind, Schema},
    utils::{current_timestamp, generate_id},
};

/// Accepted post statuses, in declaration order
pub const STATUSES: &[&str] = &["draft", "published", "archived"];

const TITLE: Field = Field::required("title", FieldKind::String)
    .with(&[Constraint::MinLength(5), Constraint::MaxLength(200)]);
const CONTENT: Field = Field::required("content", FieldKind::String).with(&[Constraint::MinLength(10)]);
const AUTHOR_ID: Field = Field::required("author_id", FieldKind::String).with(&[Constraint::Uuid]);

/// Publication status of a post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// Post entity
///
/// `author_id` is a weak reference; nothing checks that the user exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contract for Post {
    const SCHEMA: Schema = Schema {
        name: "Post",
        fields: &[
            Field::required("id", FieldKind::String).with(&[Constraint::Uuid]),
            TITLE,
            CONTENT,
            AUTHOR_ID,
            Field::required("status", FieldKind::String).with(&[Constraint::OneOf(STATUSES)]),
            Field::required("created_at", FieldKind::Timestamp),
            Field::required("updated_at", FieldKind::Timestamp),
        ],
    };
}

/// New post creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

impl Contract for CreatePost {
    const SCHEMA: Schema = Schema {
        name: "CreatePost",
        fields: &[TITLE, CONTENT, AUTHOR_ID],
    };
}

impl CreatePost {
    /// Build a draft post, assigning id and timestamps
    pub fn into_post(self) -> Post {
        let now = current_timestamp();
        Post {
            id: generate_id(),
            title: self.title,
            content: self.content,
            author_id: self.author_id,
            status: PostStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }
}
