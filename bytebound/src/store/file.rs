use crate::errors::{ErrorKind, StoreError, StoreResult};
use crate::store::{KeyValueStore, KeyValueStoreProvider};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const VALUE_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "tmp";

/// Key-value storage that keeps one file per key under a directory.
///
/// Keys are percent-encoded into file names, so any string is a valid key.
/// Every write goes to a temporary file first and is then renamed over the
/// old value, which leaves either the old or the new value on disk if the
/// process dies mid-write.
#[derive(Clone)]
pub struct FileKeyValueStore {
    inner: Arc<FileKeyValueStoreInner>,
}

impl FileKeyValueStore {
    /// Opens the store rooted at `directory`, creating the directory if needed.
    pub fn open(directory: impl AsRef<Path>) -> StoreResult<FileKeyValueStore> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory).map_err(|e| {
            log::error!("Failed to create store directory {:?}: {}", directory, e);
            StoreError::new_with_cause(
                &format!("Cannot open file store at {}", directory.display()),
                ErrorKind::IOError,
                e.into(),
            )
        })?;

        Ok(FileKeyValueStore {
            inner: Arc::new(FileKeyValueStoreInner {
                directory,
                write_lock: Mutex::new(()),
            }),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.inner.directory
    }
}

impl KeyValueStoreProvider for FileKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.inner.remove(key)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        self.inner.keys()
    }

    fn flush(&self) -> StoreResult<()> {
        Ok(())
    }
}

impl From<FileKeyValueStore> for KeyValueStore {
    fn from(store: FileKeyValueStore) -> Self {
        KeyValueStore::new(store)
    }
}

struct FileKeyValueStoreInner {
    directory: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStoreInner {
    fn value_path(&self, key: &str) -> PathBuf {
        self.directory
            .join(format!("{}.{}", encode_key(key), VALUE_EXTENSION))
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.value_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock();
        let path = self.value_path(key);
        let temp_path = path.with_extension(TEMP_EXTENSION);

        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock();
        match fs::remove_file(self.value_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(VALUE_EXTENSION) {
                continue;
            }
            if let Some(key) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(decode_key)
            {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

fn encode_key(key: &str) -> String {
    urlencoding::encode(key).into_owned()
}

fn decode_key(encoded: &str) -> Option<String> {
    urlencoding::decode(encoded).map(Cow::into_owned).ok()
}
