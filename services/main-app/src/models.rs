//! Main app models for request and response payloads

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared::{
    Contract, Schema,
    contracts::Post,
    schema::{Constraint, Field, FieldKind},
};

/// Todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub task: String,
    pub done: bool,
}

/// Request for todo creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub task: String,
}

impl Contract for CreateTodo {
    const SCHEMA: Schema = Schema {
        name: "CreateTodo",
        fields: &[Field::required("task", FieldKind::String)
            .with(&[Constraint::MinLength(1), Constraint::MaxLength(500)])],
    };
}

/// Response for todo listing
#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub todos: Vec<Todo>,
}

/// Response for todo creation
#[derive(Debug, Serialize)]
pub struct TodoCreatedResponse {
    pub created: bool,
    pub todo: Todo,
}

/// Response for post listing
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<Post>,
}

/// Greeting payload
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Welcome payload listing the available endpoints
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}
