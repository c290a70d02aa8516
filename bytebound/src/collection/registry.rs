use dashmap::DashMap;

use super::{DocumentStore, LocalDocumentStore};
use crate::database_config::DatabaseConfig;
use crate::errors::{ErrorKind, StoreError, StoreResult};

/// Creates collections on first use and hands out the same handle for a name
/// afterwards.
///
/// Each database owns one registry. Collections are never evicted, so every
/// handle for a name sees the same in-memory state.
pub(crate) struct CollectionRegistry {
    config: DatabaseConfig,
    collections: DashMap<String, DocumentStore>,
}

impl CollectionRegistry {
    pub(crate) fn new(config: DatabaseConfig) -> Self {
        CollectionRegistry {
            config,
            collections: DashMap::new(),
        }
    }

    pub(crate) fn get_or_create(&self, name: &str) -> StoreResult<DocumentStore> {
        if name.is_empty() {
            log::error!("Collection name cannot be empty");
            return Err(StoreError::new(
                "Collection name cannot be empty",
                ErrorKind::ValidationError,
            ));
        }

        if let Some(collection) = self.collections.get(name) {
            return Ok(collection.value().clone());
        }

        let collection = self
            .collections
            .entry(name.to_string())
            .or_insert_with(|| {
                log::debug!("Creating collection '{}'", name);
                DocumentStore::new(LocalDocumentStore::new(name, &self.config))
            })
            .value()
            .clone();
        Ok(collection)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Names of the collections created so far, sorted.
    pub(crate) fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .collections
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }
}
