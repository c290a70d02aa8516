use fjall::{Config, PartitionCreateOptions};

/// Default name of the partition collections are stored in.
pub const DEFAULT_PARTITION_NAME: &str = "bytebound";

/// Settings for a [crate::FjallKeyValueStore].
///
/// | setting | default |
/// |---|---|
/// | db path | none, must be set |
/// | partition name | `"bytebound"` |
/// | manual journal persist | `false` |
/// | fsync interval | none (fjall decides) |
/// | cache size | 32 MiB |
#[derive(Debug, Clone)]
pub struct FjallConfig {
    db_path: Option<String>,
    partition_name: String,
    manual_journal_persist: bool,
    fsync_ms: Option<u16>,
    cache_size: u64,
}

impl Default for FjallConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FjallConfig {
    pub fn new() -> FjallConfig {
        FjallConfig {
            db_path: None,
            partition_name: DEFAULT_PARTITION_NAME.to_string(),
            manual_journal_persist: false,
            fsync_ms: None,
            cache_size: 32 * 1024 * 1024,
        }
    }

    #[inline]
    pub fn db_path(&self) -> Option<&str> {
        self.db_path.as_deref()
    }

    #[inline]
    pub fn partition_name(&self) -> &str {
        &self.partition_name
    }

    #[inline]
    pub fn manual_journal_persist(&self) -> bool {
        self.manual_journal_persist
    }

    #[inline]
    pub fn fsync_ms(&self) -> Option<u16> {
        self.fsync_ms
    }

    #[inline]
    pub fn cache_size(&self) -> u64 {
        self.cache_size
    }

    pub(crate) fn set_db_path(&mut self, db_path: &str) {
        self.db_path = Some(db_path.to_string());
    }

    pub(crate) fn set_partition_name(&mut self, name: &str) {
        self.partition_name = name.to_string();
    }

    pub(crate) fn set_manual_journal_persist(&mut self, manual: bool) {
        self.manual_journal_persist = manual;
    }

    pub(crate) fn set_fsync_ms(&mut self, fsync_ms: Option<u16>) {
        self.fsync_ms = fsync_ms;
    }

    pub(crate) fn set_cache_size(&mut self, cache_size: u64) {
        self.cache_size = cache_size;
    }

    /// Builds the fjall keyspace configuration for `db_path`.
    pub(crate) fn keyspace_config(&self, db_path: &str) -> Config {
        let mut config = Config::new(db_path)
            .manual_journal_persist(self.manual_journal_persist)
            .cache_size(self.cache_size);

        if self.fsync_ms.is_some() {
            config = config.fsync_ms(self.fsync_ms);
        }
        config
    }

    #[inline]
    pub(crate) fn partition_config(&self) -> PartitionCreateOptions {
        PartitionCreateOptions::default()
    }
}
