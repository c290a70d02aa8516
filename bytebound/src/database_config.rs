//! Configuration management for ByteBound databases.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use crate::common::{DEFAULT_IDENTITY_FIELD, DEFAULT_KEY_PREFIX};
use crate::errors::{ErrorKind, StoreError, StoreResult};
use crate::store::{InMemoryKeyValueStore, KeyValueStore};

/// Configuration shared by a database and all of its collections.
///
/// Settings can change until the database is opened; after that every setter
/// fails with [ErrorKind::InvalidOperation]. Clones share the same settings.
///
/// | setting | default |
/// |---|---|
/// | key prefix | `"store_"` |
/// | identity field | `"id"` |
/// | key-value store | a fresh [InMemoryKeyValueStore] |
/// | flush on write | `false` |
#[derive(Clone)]
pub struct DatabaseConfig {
    inner: Arc<DatabaseConfigInner>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseConfig {
    pub fn new() -> Self {
        DatabaseConfig {
            inner: Arc::new(DatabaseConfigInner::new()),
        }
    }

    /// Prefix prepended to a collection name to form its storage key.
    pub fn key_prefix(&self) -> String {
        self.inner.key_prefix.read().clone()
    }

    /// Sets the storage key prefix. An empty prefix is allowed.
    pub fn set_key_prefix(&self, prefix: &str) -> StoreResult<()> {
        self.inner.ensure_not_configured("Key prefix")?;
        *self.inner.key_prefix.write() = prefix.to_string();
        Ok(())
    }

    /// Name of the field that holds each document's identity.
    pub fn identity_field(&self) -> String {
        self.inner.identity_field.read().clone()
    }

    pub fn set_identity_field(&self, field: &str) -> StoreResult<()> {
        self.inner.ensure_not_configured("Identity field")?;
        if field.is_empty() {
            log::error!("Identity field cannot be empty");
            return Err(StoreError::new(
                "Identity field cannot be empty",
                ErrorKind::ValidationError,
            ));
        }
        *self.inner.identity_field.write() = field.to_string();
        Ok(())
    }

    /// The key-value store collections persist into.
    ///
    /// Falls back to a new in-memory store the first time it is read if none
    /// was set.
    pub fn key_value_store(&self) -> KeyValueStore {
        self.inner
            .key_value_store
            .get_or_init(|| KeyValueStore::new(InMemoryKeyValueStore::new()))
            .clone()
    }

    pub fn set_key_value_store(&self, store: KeyValueStore) -> StoreResult<()> {
        self.inner.ensure_not_configured("Key-value store")?;
        self.inner.key_value_store.set(store).map_err(|_| {
            log::error!("Key-value store is already set");
            StoreError::new("Key-value store is already set", ErrorKind::InvalidOperation)
        })
    }

    /// Whether every persisted write is followed by a flush of the
    /// key-value store.
    pub fn flush_on_write(&self) -> bool {
        self.inner.flush_on_write.load(Ordering::Relaxed)
    }

    pub fn set_flush_on_write(&self, flush: bool) -> StoreResult<()> {
        self.inner.ensure_not_configured("Flush on write")?;
        self.inner.flush_on_write.store(flush, Ordering::Relaxed);
        Ok(())
    }

    /// Returns the storage key for a collection: prefix followed by name.
    pub fn storage_key(&self, collection_name: &str) -> String {
        format!("{}{}", self.inner.key_prefix.read(), collection_name)
    }

    pub(crate) fn initialize(&self) {
        // resolves the default store before the settings freeze
        let _ = self.key_value_store();
        self.inner.configured.store(true, Ordering::Relaxed);
    }
}

struct DatabaseConfigInner {
    configured: AtomicBool,
    key_prefix: RwLock<String>,
    identity_field: RwLock<String>,
    key_value_store: OnceLock<KeyValueStore>,
    flush_on_write: AtomicBool,
}

impl DatabaseConfigInner {
    fn new() -> Self {
        DatabaseConfigInner {
            configured: AtomicBool::from(false),
            key_prefix: RwLock::new(DEFAULT_KEY_PREFIX.to_string()),
            identity_field: RwLock::new(DEFAULT_IDENTITY_FIELD.to_string()),
            key_value_store: OnceLock::new(),
            flush_on_write: AtomicBool::from(false),
        }
    }

    fn ensure_not_configured(&self, setting: &str) -> StoreResult<()> {
        if self.configured.load(Ordering::Relaxed) {
            log::error!("{} cannot be changed after initialization", setting);
            return Err(StoreError::new(
                &format!("{} cannot be changed after initialization", setting),
                ErrorKind::InvalidOperation,
            ));
        }
        Ok(())
    }
}
