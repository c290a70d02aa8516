use parking_lot::RwLock;
use std::sync::Arc;

use super::{
    apply_update, DeleteResult, Document, DocumentCursor, DocumentStore, DocumentStoreProvider,
    InsertOneResult, UpdateResult,
};
use crate::common::Value;
use crate::database_config::DatabaseConfig;
use crate::errors::StoreResult;
use crate::filter::Filter;
use crate::store::KeyValueStore;

/// A collection held in memory and persisted in full through a
/// [KeyValueStore] after every write.
///
/// The collection is loaded from its storage key when created. A missing
/// key yields an empty collection; so does a value that cannot be read or
/// parsed, after logging the fault. Persisting failures are logged too, and
/// the in-memory state stays authoritative.
///
/// All operations on one collection are serialized by a read-write lock held
/// for their whole duration.
#[derive(Clone)]
pub struct LocalDocumentStore {
    inner: Arc<LocalDocumentStoreInner>,
}

impl LocalDocumentStore {
    pub fn new(name: &str, config: &DatabaseConfig) -> LocalDocumentStore {
        LocalDocumentStore {
            inner: Arc::new(LocalDocumentStoreInner::new(name, config)),
        }
    }

    /// The key this collection is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.inner.storage_key
    }
}

impl DocumentStoreProvider for LocalDocumentStore {
    fn name(&self) -> String {
        self.inner.name.clone()
    }

    fn find(&self, filter: &Document) -> DocumentCursor {
        self.inner.find(filter)
    }

    fn find_one(&self, filter: &Document) -> Option<Document> {
        self.inner.find_one(filter)
    }

    fn insert_one(&self, document: Document) -> InsertOneResult {
        self.inner.insert_one(document)
    }

    fn update_one(&self, filter: &Document, update: &Document) -> UpdateResult {
        self.inner.update_one(filter, update)
    }

    fn delete_one(&self, filter: &Document) -> DeleteResult {
        self.inner.delete_one(filter)
    }

    fn count_documents(&self, filter: &Document) -> u64 {
        self.inner.count_documents(filter)
    }
}

impl From<LocalDocumentStore> for DocumentStore {
    fn from(store: LocalDocumentStore) -> Self {
        DocumentStore::new(store)
    }
}

struct LocalDocumentStoreInner {
    name: String,
    storage_key: String,
    identity_field: String,
    flush_on_write: bool,
    key_value_store: KeyValueStore,
    documents: RwLock<Vec<Document>>,
}

impl LocalDocumentStoreInner {
    fn new(name: &str, config: &DatabaseConfig) -> Self {
        let storage_key = config.storage_key(name);
        let key_value_store = config.key_value_store();
        let documents = load_documents(&key_value_store, &storage_key);
        log::debug!(
            "Loaded {} documents into collection '{}' from key '{}'",
            documents.len(),
            name,
            storage_key
        );

        LocalDocumentStoreInner {
            name: name.to_string(),
            storage_key,
            identity_field: config.identity_field(),
            flush_on_write: config.flush_on_write(),
            key_value_store,
            documents: RwLock::new(documents),
        }
    }

    fn find(&self, query: &Document) -> DocumentCursor {
        let filter = Filter::parse(query);
        log::debug!("find on '{}' with {}", self.name, filter);

        let documents = self.documents.read();
        let matched = documents
            .iter()
            .filter(|doc| filter.apply(doc))
            .cloned()
            .collect();
        DocumentCursor::new(matched)
    }

    fn find_one(&self, query: &Document) -> Option<Document> {
        let documents = self.documents.read();

        match query.get(&self.identity_field) {
            Some(id) if !id.is_null() => {
                log::debug!("find_one on '{}' by {} {}", self.name, self.identity_field, id);
                let id_text = id.to_text();
                documents
                    .iter()
                    .find(|doc| match doc.get(&self.identity_field) {
                        Some(value) if !value.is_null() => {
                            value == id || value.to_text() == id_text
                        }
                        _ => false,
                    })
                    .cloned()
            }
            _ => {
                let filter = Filter::equality(query);
                log::debug!("find_one on '{}' with {}", self.name, filter);
                documents.iter().find(|doc| filter.apply(doc)).cloned()
            }
        }
    }

    fn insert_one(&self, mut document: Document) -> InsertOneResult {
        let inserted_id = match document.get(&self.identity_field) {
            Some(id) if !id.is_null() => id.clone(),
            _ => {
                let id = Value::from(uuid::Uuid::new_v4().to_string());
                document.put(self.identity_field.clone(), id.clone());
                id
            }
        };
        log::debug!("insert_one on '{}' with {} {}", self.name, self.identity_field, inserted_id);

        let mut documents = self.documents.write();
        documents.push(document);
        self.persist(&documents);
        InsertOneResult::new(inserted_id)
    }

    fn update_one(&self, query: &Document, update: &Document) -> UpdateResult {
        let filter = Filter::equality(query);
        log::debug!("update_one on '{}' with {}", self.name, filter);

        let mut documents = self.documents.write();
        match documents.iter().position(|doc| filter.apply(doc)) {
            Some(index) => {
                apply_update(&mut documents[index], update, &self.identity_field);
                self.persist(&documents);
                UpdateResult::matched()
            }
            None => UpdateResult::unmatched(),
        }
    }

    fn delete_one(&self, query: &Document) -> DeleteResult {
        let filter = Filter::equality(query);
        log::debug!("delete_one on '{}' with {}", self.name, filter);

        let mut documents = self.documents.write();
        let deleted_count = match documents.iter().position(|doc| filter.apply(doc)) {
            Some(index) => {
                documents.remove(index);
                1
            }
            None => 0,
        };
        self.persist(&documents);
        DeleteResult::new(deleted_count)
    }

    fn count_documents(&self, query: &Document) -> u64 {
        let filter = Filter::equality(query);
        log::debug!("count_documents on '{}' with {}", self.name, filter);

        let documents = self.documents.read();
        documents.iter().filter(|doc| filter.apply(doc)).count() as u64
    }

    fn persist(&self, documents: &[Document]) {
        if let Err(e) = self.write_documents(documents) {
            log::error!(
                "Failed to persist collection '{}' under key '{}': {}",
                self.name,
                self.storage_key,
                e
            );
        }
    }

    fn write_documents(&self, documents: &[Document]) -> StoreResult<()> {
        let serialized = serde_json::to_string(documents)?;
        self.key_value_store.set(&self.storage_key, &serialized)?;
        if self.flush_on_write {
            self.key_value_store.flush()?;
        }
        Ok(())
    }
}

fn load_documents(key_value_store: &KeyValueStore, storage_key: &str) -> Vec<Document> {
    let serialized = match key_value_store.get(storage_key) {
        Ok(Some(serialized)) => serialized,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::error!("Failed to read key '{}': {}", storage_key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Value>>(&serialized) {
        Ok(values) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::Document(doc) => Some(doc),
                other => {
                    log::warn!("Skipping non-document entry {} under key '{}'", other, storage_key);
                    None
                }
            })
            .collect(),
        Err(e) => {
            log::error!("Failed to parse stored value under key '{}': {}", storage_key, e);
            Vec::new()
        }
    }
}
