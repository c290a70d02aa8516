use crate::errors::StoreError;
use crate::store::KeyValueStore;
use crate::{database::Database, database_config::DatabaseConfig, errors::StoreResult};

/// Builder for opening a [Database].
///
/// Invalid settings do not fail immediately; the first error is kept and
/// returned by [DatabaseBuilder::open].
///
/// # Examples
///
/// ```rust,ignore
/// use bytebound::database::Database;
/// use bytebound::store::FileKeyValueStore;
///
/// let db = Database::builder()
///     .key_prefix("bytebound_")
///     .key_value_store(FileKeyValueStore::open("/var/lib/bytebound")?)
///     .flush_on_write(true)
///     .open()?;
/// ```
#[derive(Default)]
pub struct DatabaseBuilder {
    error: Option<StoreError>,
    config: DatabaseConfig,
}

impl DatabaseBuilder {
    pub fn new() -> Self {
        DatabaseBuilder {
            error: None,
            config: DatabaseConfig::new(),
        }
    }

    /// Sets the prefix of every collection's storage key (default `"store_"`).
    pub fn key_prefix(mut self, prefix: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_key_prefix(prefix) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Sets the identity field name (default `"id"`). Must not be empty.
    pub fn identity_field(mut self, field: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_identity_field(field) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Sets the key-value store collections persist into.
    pub fn key_value_store(mut self, store: impl Into<KeyValueStore>) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_key_value_store(store.into()) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Flushes the key-value store after every persisted write.
    pub fn flush_on_write(mut self, flush: bool) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_flush_on_write(flush) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Opens the database, or returns the first error met while building.
    pub fn open(self) -> StoreResult<Database> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.config.initialize();
        Ok(Database::new(self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::store::InMemoryKeyValueStore;

    #[test]
    fn test_defaults() {
        let db = DatabaseBuilder::new().open().unwrap();
        assert_eq!(db.config().key_prefix(), "store_");
        assert_eq!(db.config().identity_field(), "id");
    }

    #[test]
    fn test_settings_are_applied() {
        let db = DatabaseBuilder::new()
            .key_prefix("app_")
            .identity_field("_id")
            .key_value_store(InMemoryKeyValueStore::new())
            .flush_on_write(true)
            .open()
            .unwrap();
        assert_eq!(db.config().storage_key("blogs"), "app_blogs");
        assert_eq!(db.config().identity_field(), "_id");
        assert!(db.config().flush_on_write());
    }

    #[test]
    fn test_identity_field_error_propagation() {
        let result = DatabaseBuilder::new().identity_field("").open();
        let err = result.err().unwrap();
        assert_eq!(err.kind(), &ErrorKind::ValidationError);
        assert!(err.to_string().to_lowercase().contains("identity field"));
    }

    #[test]
    fn test_first_error_is_kept() {
        let result = DatabaseBuilder::new()
            .key_value_store(InMemoryKeyValueStore::new())
            .identity_field("")
            .key_value_store(InMemoryKeyValueStore::new())
            .open();
        let err = result.err().unwrap();
        assert_eq!(err.kind(), &ErrorKind::ValidationError);
    }

    #[test]
    fn test_second_store_is_rejected() {
        let result = DatabaseBuilder::new()
            .key_value_store(InMemoryKeyValueStore::new())
            .key_value_store(InMemoryKeyValueStore::new())
            .open();
        assert_eq!(result.err().unwrap().kind(), &ErrorKind::InvalidOperation);
    }
}
