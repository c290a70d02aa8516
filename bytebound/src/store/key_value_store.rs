use crate::errors::StoreResult;
use std::ops::Deref;
use std::sync::Arc;

/// Durable string key-value storage used to persist collections.
///
/// Each collection is stored as one value, a JSON array of documents, under
/// the key formed by the configured prefix and the collection name. A
/// provider only needs to store and return strings faithfully; it never sees
/// documents.
///
/// # Implementations
/// - `InMemoryKeyValueStore`: process-local storage, the default
/// - `FileKeyValueStore`: one file per key under a directory
/// - `FjallKeyValueStore` (in `bytebound-fjall-adapter`): an LSM-tree keyspace
///
/// # Thread Safety
/// Implementers must be `Send + Sync`; the document store calls them while
/// holding a collection lock, from whichever thread runs the operation.
pub trait KeyValueStoreProvider: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Returns all keys currently stored, in no particular order.
    fn keys(&self) -> StoreResult<Vec<String>>;

    /// Makes all previous writes durable.
    ///
    /// For in-memory storage this is a no-op.
    fn flush(&self) -> StoreResult<()>;
}

/// A cheaply cloneable handle to a key-value store.
///
/// Clones share the same underlying storage.
#[derive(Clone)]
pub struct KeyValueStore {
    inner: Arc<dyn KeyValueStoreProvider>,
}

impl KeyValueStore {
    pub fn new<T: KeyValueStoreProvider + 'static>(inner: T) -> Self {
        KeyValueStore {
            inner: Arc::new(inner),
        }
    }
}

impl Deref for KeyValueStore {
    type Target = Arc<dyn KeyValueStoreProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
