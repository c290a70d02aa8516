use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::collection::{CollectionRegistry, DocumentStore};
use crate::database_builder::DatabaseBuilder;
use crate::database_config::DatabaseConfig;
use crate::errors::{ErrorKind, StoreError, StoreResult};
use crate::store::KeyValueStore;

/// Entry point to a set of named document collections.
///
/// A database owns its configuration and a registry of collections. Handles
/// are cheap to clone and share the same registry, so two handles asking for
/// `"blogs"` get the same collection. Separate databases built on the same
/// key-value store see each other's persisted data only when a collection is
/// first loaded.
///
/// # Examples
///
/// ```rust,ignore
/// use bytebound::database::Database;
/// use bytebound::doc;
///
/// let db = Database::builder().open()?;
/// let users = db.collection("users")?;
/// users.insert_one(doc! { id: "u1", name: "Ada" });
/// assert!(users.find_one(&doc! { id: "u1" }).is_some());
/// db.close()?;
/// ```
#[derive(Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Database {
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    pub(crate) fn new(config: DatabaseConfig) -> Self {
        Database {
            inner: Arc::new(DatabaseInner::new(config)),
        }
    }

    /// Returns the collection with the given name, creating and loading it
    /// on first use.
    pub fn collection(&self, name: &str) -> StoreResult<DocumentStore> {
        self.inner.check_opened()?;
        self.inner.registry.get_or_create(name)
    }

    /// Whether a collection with this name has been opened on this database.
    pub fn has_collection(&self, name: &str) -> bool {
        self.inner.registry.contains(name)
    }

    /// Names of the collections opened on this database, sorted.
    pub fn collection_names(&self) -> Vec<String> {
        self.inner.registry.names()
    }

    pub fn config(&self) -> DatabaseConfig {
        self.inner.config.clone()
    }

    pub fn key_value_store(&self) -> KeyValueStore {
        self.inner.config.key_value_store()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Relaxed)
    }

    /// Flushes the key-value store and closes the database.
    ///
    /// Collection handles obtained earlier keep working on their in-memory
    /// state; new handles cannot be obtained. Closing twice is a no-op.
    pub fn close(&self) -> StoreResult<()> {
        if self.inner.closed.swap(true, Ordering::Relaxed) {
            return Ok(());
        }
        log::debug!("Closing database");
        self.inner.config.key_value_store().flush()
    }
}

struct DatabaseInner {
    config: DatabaseConfig,
    registry: CollectionRegistry,
    closed: AtomicBool,
}

impl DatabaseInner {
    fn new(config: DatabaseConfig) -> Self {
        DatabaseInner {
            registry: CollectionRegistry::new(config.clone()),
            config,
            closed: AtomicBool::from(false),
        }
    }

    fn check_opened(&self) -> StoreResult<()> {
        if self.closed.load(Ordering::Relaxed) {
            log::error!("Database is already closed");
            return Err(StoreError::new(
                "Database is already closed",
                ErrorKind::StoreAlreadyClosed,
            ));
        }
        Ok(())
    }
}
