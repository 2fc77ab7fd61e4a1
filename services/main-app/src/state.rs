//! Application state shared across handlers

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use shared::{contracts::Post, store::MemoryStore};
use uuid::Uuid;

use crate::models::Todo;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub todo_store: MemoryStore<u64, Todo>,
    pub post_store: MemoryStore<Uuid, Post>,
    next_todo_id: Arc<AtomicU64>,
}

impl AppState {
    /// State seeded with the starter todo list
    pub fn new() -> Self {
        Self::with_todos(["Learn Deno", "Build an API"])
    }

    /// State seeded with the given tasks, numbered from 1
    pub fn with_todos<'a>(tasks: impl IntoIterator<Item = &'a str>) -> Self {
        let todos: Vec<Todo> = tasks
            .into_iter()
            .zip(1..)
            .map(|(task, id)| Todo {
                id,
                task: task.to_string(),
                done: false,
            })
            .collect();
        let next_id = todos.len() as u64 + 1;

        Self {
            todo_store: MemoryStore::with_entries(todos.into_iter().map(|todo| (todo.id, todo))),
            post_store: MemoryStore::new(),
            next_todo_id: Arc::new(AtomicU64::new(next_id)),
        }
    }

    /// Reserve the next sequential todo id
    pub fn next_todo_id(&self) -> u64 {
        self.next_todo_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
