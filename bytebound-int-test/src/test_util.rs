use bytebound::collection::{Document, DocumentStore};
use bytebound::database::Database;
use bytebound::doc;
use bytebound::errors::{ErrorKind, StoreError, StoreResult};
use bytebound::store::KeyValueStore;
use chrono::{Duration as ChronoDuration, SecondsFormat, Utc};
use std::time::{Duration, Instant};
use std::{env, fs, thread};

/// Runs a test between `before` and `after`, retrying a failed attempt up to
/// three times. `after` runs after every attempt, including one that
/// panicked.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> StoreResult<()>,
    B: Fn() -> StoreResult<TestContext>,
    A: Fn(TestContext) -> StoreResult<()>,
{
    const MAX_RETRIES: u32 = 3;
    let mut last_error = String::new();

    for attempt in 1..=MAX_RETRIES {
        let start_time = Instant::now();
        let error = match before() {
            Ok(ctx) => {
                let outcome =
                    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| test(ctx.clone())));
                let cleanup = after(ctx).map_err(|e| format!("After run failed: {:?}", e));
                match outcome {
                    Ok(Ok(())) => match cleanup {
                        Ok(()) => return,
                        Err(e) => e,
                    },
                    Ok(Err(e)) => format!("Test failed: {:?}", e),
                    Err(panic) => panic_message(panic),
                }
            }
            Err(e) => format!("Before run failed: {:?}", e),
        };

        eprintln!(
            "Test attempt {}/{} failed after {:?}: {}",
            attempt,
            MAX_RETRIES,
            start_time.elapsed(),
            error
        );
        last_error = error;
        if attempt < MAX_RETRIES {
            thread::sleep(Duration::from_millis(100 * attempt as u64));
        }
    }

    panic!(
        "Test failed after {} attempts. Last error: {}",
        MAX_RETRIES, last_error
    );
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("Panic: {}", s)
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("Panic: {}", s)
    } else {
        "Panic: unknown payload".to_string()
    }
}

#[derive(Clone)]
pub struct TestContext {
    path: String,
    db: Database,
}

impl TestContext {
    pub fn new(path: String, db: Database) -> Self {
        Self { path, db }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn db(&self) -> Database {
        self.db.clone()
    }
}

pub fn random_path() -> String {
    let id = uuid::Uuid::new_v4();
    let temp_dir = env::temp_dir();
    temp_dir.join(id.to_string()).to_string_lossy().to_string()
}

/// Opens the key-value store the tests run against.
#[cfg(feature = "fjall")]
pub fn open_key_value_store(path: &str) -> StoreResult<KeyValueStore> {
    use bytebound_fjall_adapter::FjallKeyValueStore;

    let store = FjallKeyValueStore::builder().db_path(path).open()?;
    Ok(store.into())
}

/// Opens the key-value store the tests run against.
#[cfg(all(feature = "file", not(feature = "fjall")))]
pub fn open_key_value_store(path: &str) -> StoreResult<KeyValueStore> {
    use bytebound::store::FileKeyValueStore;

    Ok(FileKeyValueStore::open(path)?.into())
}

/// Opens the key-value store the tests run against.
#[cfg(not(any(feature = "file", feature = "fjall")))]
pub fn open_key_value_store(_path: &str) -> StoreResult<KeyValueStore> {
    use bytebound::store::InMemoryKeyValueStore;

    Ok(InMemoryKeyValueStore::new().into())
}

/// A fresh database on its own storage location.
pub fn create_test_context() -> StoreResult<TestContext> {
    const MAX_ATTEMPTS: u32 = 3;
    let mut last_error: Option<StoreError> = None;

    for attempt in 1..=MAX_ATTEMPTS {
        let path = random_path();
        let db = open_key_value_store(&path)
            .and_then(|store| Database::builder().key_value_store(store).open());

        match db {
            Ok(db) => return Ok(TestContext::new(path, db)),
            Err(e) => {
                let _ = fs::remove_dir_all(&path);
                eprintln!(
                    "Warning: Failed to create test context (attempt {}/{}): {:?}",
                    attempt, MAX_ATTEMPTS, e
                );
                last_error = Some(e);
                thread::sleep(Duration::from_millis(50 * attempt as u64));
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        StoreError::new("Failed to create test context", ErrorKind::InternalError)
    }))
}

/// Closes the database and removes its storage directory, if any.
pub fn cleanup(ctx: TestContext) -> StoreResult<()> {
    ctx.db().close()?;
    drop(ctx.db);

    let path = ctx.path;
    for retry in 0..5u64 {
        if !std::path::Path::new(&path).exists() {
            return Ok(());
        }
        match fs::remove_dir_all(&path) {
            Ok(_) => return Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                if retry == 4 {
                    // The OS removes temp files eventually.
                    eprintln!("Warning: Failed to remove test directory {}: {:?}", path, e);
                    return Ok(());
                }
                thread::sleep(Duration::from_millis(50 * (retry + 1)));
            }
        }
    }
    Ok(())
}

/// An RFC 3339 UTC timestamp `days` days before now.
pub fn days_ago(days: i64) -> String {
    (Utc::now() - ChronoDuration::days(days)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn create_test_docs() -> Vec<Document> {
    vec![
        doc! {
            id: "p1",
            title: "Getting started with Rust",
            status: "published",
            tags: ["rust", "beginner"],
            likes_count: 3,
            created_at: (days_ago(3)),
        },
        doc! {
            id: "p2",
            title: "Embedded databases",
            status: "draft",
            tags: ["db"],
            likes_count: 7,
            created_at: (days_ago(2)),
        },
        doc! {
            id: "p3",
            title: "Old news",
            status: "archived",
            tags: ["rust", "db"],
            likes_count: 1,
            created_at: (days_ago(1)),
        },
    ]
}

pub fn insert_test_documents(collection: &DocumentStore) {
    for document in create_test_docs() {
        collection.insert_one(document);
    }
}

/// Text of a field of each document, in order.
pub fn field_texts<'a>(documents: impl IntoIterator<Item = &'a Document>, field: &str) -> Vec<String> {
    documents
        .into_iter()
        .map(|doc| doc.get_or_null(field).to_text())
        .collect()
}

pub fn is_sorted<T: Ord>(iterable: impl IntoIterator<Item = T>, ascending: bool) -> bool {
    let mut iter = iterable.into_iter();
    if let Some(mut prev) = iter.next() {
        for current in iter {
            if (ascending && prev > current) || (!ascending && prev < current) {
                return false;
            }
            prev = current;
        }
    }
    true
}
