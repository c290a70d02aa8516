use super::{DeleteResult, Document, DocumentCursor, InsertOneResult, UpdateResult};
use std::ops::Deref;
use std::sync::Arc;

/// Trait defining the operations of a named document collection.
///
/// Filters and updates are written as documents in the MongoDB style (see
/// [crate::filter]). Every operation is total: a filter that matches nothing
/// yields an empty cursor, `None` or a zero count, and storage faults are
/// logged by the implementation rather than returned.
pub trait DocumentStoreProvider: Send + Sync {
    /// Name of the collection.
    fn name(&self) -> String;

    /// Returns a cursor over the documents matching `filter`.
    ///
    /// The filter supports plain equality, `$ne`, `$in`, `$regex`/`$options`,
    /// `$or` and `$and`. An empty filter matches every document.
    fn find(&self, filter: &Document) -> DocumentCursor;

    /// Returns the first document matching `filter`.
    ///
    /// A filter carrying a non-null identity value is a lookup by identity:
    /// the first document whose identity equals it, or renders to the same
    /// text, is returned and the other pairs are not consulted. Otherwise
    /// every pair must match by plain equality.
    fn find_one(&self, filter: &Document) -> Option<Document>;

    /// Stores a document, assigning a generated identity if it has none.
    fn insert_one(&self, document: Document) -> InsertOneResult;

    /// Applies `$set` then `$inc` from `update` to the first document whose
    /// fields equal every pair of `filter`.
    fn update_one(&self, filter: &Document, update: &Document) -> UpdateResult;

    /// Removes the first document whose fields equal every pair of `filter`.
    fn delete_one(&self, filter: &Document) -> DeleteResult;

    /// Counts the documents whose fields equal every pair of `filter`.
    fn count_documents(&self, filter: &Document) -> u64;
}

/// A cheaply cloneable handle to a document collection.
///
/// Handles for the same name obtained from the same database share state.
///
/// # Examples
///
/// ```rust,ignore
/// use bytebound::doc;
/// use bytebound::common::SortOrder;
///
/// let posts = db.collection("blogs")?;
/// let result = posts.insert_one(doc! { title: "Hello", status: "published" });
///
/// let published = posts
///     .find(&doc! { status: "published" })
///     .sort("created_at", SortOrder::Descending)
///     .limit(10)
///     .to_vec();
///
/// posts.update_one(&doc! { id: (result.inserted_id) }, &doc! { "$inc": { views_count: 1 } });
/// ```
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<dyn DocumentStoreProvider>,
}

impl DocumentStore {
    pub fn new<T: DocumentStoreProvider + 'static>(inner: T) -> Self {
        DocumentStore {
            inner: Arc::new(inner),
        }
    }
}

impl Deref for DocumentStore {
    type Target = Arc<dyn DocumentStoreProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
