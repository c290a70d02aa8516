use bytebound::errors::StoreResult;
use bytebound::store::{KeyValueStore, KeyValueStoreProvider};
use fjall::{Keyspace, PartitionHandle, PersistMode};
use std::ops::RangeFull;
use std::sync::Arc;

use crate::{FjallConfig, FjallStoreError, FjallStoreResult};

/// A persistent key-value store backed by the Fjall LSM engine.
///
/// All keys live in a single partition of one keyspace. Values are the UTF-8
/// bytes of the stored strings. Writes reach the journal immediately;
/// [KeyValueStoreProvider::flush] persists the journal with
/// [PersistMode::SyncAll].
///
/// Clones share the same keyspace.
#[derive(Clone)]
pub struct FjallKeyValueStore {
    inner: Arc<FjallKeyValueStoreInner>,
}

impl FjallKeyValueStore {
    pub fn builder() -> FjallKeyValueStoreBuilder {
        FjallKeyValueStoreBuilder::new()
    }

    /// Opens (or creates) the store described by `config`.
    pub fn open(config: FjallConfig) -> StoreResult<FjallKeyValueStore> {
        let inner = FjallKeyValueStoreInner::open(config).map_err(|err| {
            log::error!("Failed to open fjall key-value store: {}", err);
            err
        })?;
        Ok(FjallKeyValueStore {
            inner: Arc::new(inner),
        })
    }

    pub fn config(&self) -> &FjallConfig {
        &self.inner.config
    }
}

impl KeyValueStoreProvider for FjallKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.inner.get(key)?)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        Ok(self.inner.set(key, value)?)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        Ok(self.inner.remove(key)?)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.inner.keys()?)
    }

    fn flush(&self) -> StoreResult<()> {
        Ok(self.inner.flush()?)
    }
}

impl From<FjallKeyValueStore> for KeyValueStore {
    fn from(store: FjallKeyValueStore) -> Self {
        KeyValueStore::new(store)
    }
}

/// Builder for [FjallKeyValueStore].
#[derive(Default)]
pub struct FjallKeyValueStoreBuilder {
    config: FjallConfig,
}

impl FjallKeyValueStoreBuilder {
    pub fn new() -> Self {
        FjallKeyValueStoreBuilder {
            config: FjallConfig::new(),
        }
    }

    /// Directory of the keyspace. Required.
    pub fn db_path(mut self, db_path: &str) -> Self {
        self.config.set_db_path(db_path);
        self
    }

    pub fn partition_name(mut self, name: &str) -> Self {
        self.config.set_partition_name(name);
        self
    }

    /// When enabled, the journal is only synced by an explicit flush.
    pub fn manual_journal_persist(mut self, manual: bool) -> Self {
        self.config.set_manual_journal_persist(manual);
        self
    }

    pub fn fsync_ms(mut self, fsync_ms: Option<u16>) -> Self {
        self.config.set_fsync_ms(fsync_ms);
        self
    }

    pub fn cache_size(mut self, cache_size: u64) -> Self {
        self.config.set_cache_size(cache_size);
        self
    }

    pub fn open(self) -> StoreResult<FjallKeyValueStore> {
        FjallKeyValueStore::open(self.config)
    }
}

struct FjallKeyValueStoreInner {
    config: FjallConfig,
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl FjallKeyValueStoreInner {
    fn open(config: FjallConfig) -> FjallStoreResult<Self> {
        let db_path = config.db_path().ok_or(FjallStoreError::MissingPath)?;
        let keyspace = Keyspace::open(config.keyspace_config(db_path))?;
        let partition =
            keyspace.open_partition(config.partition_name(), config.partition_config())?;
        log::debug!(
            "Opened fjall partition '{}' at {}",
            config.partition_name(),
            db_path
        );

        Ok(FjallKeyValueStoreInner {
            config,
            keyspace,
            partition,
        })
    }

    fn get(&self, key: &str) -> FjallStoreResult<Option<String>> {
        match self.partition.get(key)? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|source| FjallStoreError::InvalidUtf8 {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> FjallStoreResult<()> {
        self.partition.insert(key.as_bytes(), value.as_bytes())?;
        Ok(())
    }

    fn remove(&self, key: &str) -> FjallStoreResult<()> {
        self.partition.remove(key.as_bytes())?;
        Ok(())
    }

    fn keys(&self) -> FjallStoreResult<Vec<String>> {
        let mut keys = Vec::new();
        for result in self.partition.range::<Vec<u8>, RangeFull>(..) {
            let (key, _) = result?;
            match String::from_utf8(key.to_vec()) {
                Ok(key) => keys.push(key),
                Err(err) => log::warn!("Skipping non UTF-8 key in fjall partition: {}", err),
            }
        }
        Ok(keys)
    }

    fn flush(&self) -> FjallStoreResult<()> {
        self.keyspace.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}
