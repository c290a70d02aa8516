use crate::errors::StoreResult;
use crate::store::{KeyValueStore, KeyValueStoreProvider};
use dashmap::DashMap;
use std::sync::Arc;

/// Process-local key-value storage.
///
/// Clones share the same map, so a second database built on a clone sees
/// what the first one persisted. Tests use this to simulate a restart
/// without touching the disk.
///
/// # Examples
///
/// ```rust,ignore
/// let storage = InMemoryKeyValueStore::new();
/// let first = Database::builder().key_value_store(storage.clone()).open()?;
/// // ... write through `first`, then drop it
/// let second = Database::builder().key_value_store(storage).open()?;
/// ```
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    inner: Arc<InMemoryKeyValueStoreInner>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> InMemoryKeyValueStore {
        InMemoryKeyValueStore {
            inner: Arc::new(InMemoryKeyValueStoreInner::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }
}

impl KeyValueStoreProvider for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.inner.data.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.inner.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.inner.data.remove(key);
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.inner.data.iter().map(|entry| entry.key().clone()).collect())
    }

    fn flush(&self) -> StoreResult<()> {
        Ok(())
    }
}

impl From<InMemoryKeyValueStore> for KeyValueStore {
    fn from(store: InMemoryKeyValueStore) -> Self {
        KeyValueStore::new(store)
    }
}

#[derive(Default)]
struct InMemoryKeyValueStoreInner {
    data: DashMap<String, String>,
}
