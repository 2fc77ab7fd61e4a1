//! Application state shared across handlers

use shared::{
    contracts::{Settings, User},
    store::{MemoryStore, Store},
};
use uuid::Uuid;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState<U = MemoryStore<Uuid, User>> {
    pub user_store: U,
    pub settings: Settings,
}

impl<U: Store<Uuid, User>> AppState<U> {
    pub fn new(user_store: U) -> Self {
        Self {
            user_store,
            settings: Settings::default(),
        }
    }
}

impl AppState {
    /// State backed by a fresh in-memory user store
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}
