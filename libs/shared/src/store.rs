//! In-memory record stores
//!
//! Handlers receive a [`Store`] through application state instead of
//! reaching for process-wide collections. Nothing here is persisted.

use std::{collections::BTreeMap, future::Future, sync::Arc};

use tokio::sync::RwLock;

/// Keyed collection of records
pub trait Store<K, V>: Clone + Send + Sync + 'static {
    /// Fetch a record by key
    fn get(&self, key: &K) -> impl Future<Output = Option<V>> + Send;

    /// Insert or replace a record, returning the previous one
    fn put(&self, key: K, value: V) -> impl Future<Output = Option<V>> + Send;

    /// All records, ordered by key
    fn list(&self) -> impl Future<Output = Vec<V>> + Send;

    /// Number of records
    fn len(&self) -> impl Future<Output = usize> + Send;
}

/// Store backed by an ordered map behind a read/write lock
#[derive(Debug)]
pub struct MemoryStore<K, V> {
    entries: Arc<RwLock<BTreeMap<K, V>>>,
}

impl<K: Ord, V> MemoryStore<K, V> {
    pub fn new() -> Self {
        Self::with_entries(std::iter::empty())
    }

    /// Create a store seeded with the given records
    pub fn with_entries(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries.into_iter().collect())),
        }
    }
}

impl<K: Ord, V> Default for MemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for MemoryStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K, V> Store<K, V> for MemoryStore<K, V>
where
    K: Ord + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V> {
        self.entries.read().await.get(key).cloned()
    }

    async fn put(&self, key: K, value: V) -> Option<V> {
        self.entries.write().await.insert(key, value)
    }

    async fn list(&self) -> Vec<V> {
        self.entries.read().await.values().cloned().collect()
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_list() {
        let store: MemoryStore<u64, &str> = MemoryStore::new();
        assert!(store.list().await.is_empty());
        assert_eq!(store.len().await, 0);

        assert_eq!(store.put(2, "second").await, None);
        assert_eq!(store.put(1, "first").await, None);
        assert_eq!(store.put(2, "replaced").await, Some("second"));

        assert_eq!(store.get(&1).await, Some("first"));
        assert_eq!(store.get(&3).await, None);
        assert_eq!(store.list().await, vec!["first", "replaced"]);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryStore::with_entries([(1_u64, "seed")]);
        let handle = store.clone();

        handle.put(2, "added").await;
        assert_eq!(store.list().await, vec!["seed", "added"]);
    }

    #[tokio::test]
    async fn test_independent_stores_do_not_share() {
        let first: MemoryStore<u64, u64> = MemoryStore::default();
        let second: MemoryStore<u64, u64> = MemoryStore::default();

        first.put(1, 1).await;
        assert!(second.list().await.is_empty());
    }
}
