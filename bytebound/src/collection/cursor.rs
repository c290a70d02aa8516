use std::cmp::Ordering;

use crate::collection::Document;
use crate::common::{SortOrder, Value};

/// A materialized, ordered result of a `find` call.
///
/// The cursor owns copies of the matched documents, so later writes to the
/// collection do not affect it. Sorting, skipping and limiting are applied in
/// the order they are called:
///
/// ```rust,ignore
/// let recent = posts
///     .find(&doc! { status: { "$ne": "archived" } })
///     .sort("created_at", SortOrder::Descending)
///     .limit(3)
///     .to_vec();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentCursor {
    documents: Vec<Document>,
}

impl DocumentCursor {
    pub(crate) fn new(documents: Vec<Document>) -> Self {
        DocumentCursor { documents }
    }

    /// Reorders the documents by the value of a field.
    ///
    /// The sort is stable: documents that compare equal on the field keep
    /// their current relative order in both directions. Missing fields sort
    /// as null, before every other value. See [Value::sort_cmp] for how values
    /// of different kinds compare.
    pub fn sort(mut self, field: &str, order: SortOrder) -> Self {
        self.documents.sort_by(|a, b| {
            let cmp = compare_field(a, b, field);
            match order {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
            }
        });
        self
    }

    /// Keeps at most the first `n` documents.
    pub fn limit(mut self, n: usize) -> Self {
        self.documents.truncate(n);
        self
    }

    /// Drops the first `n` documents.
    pub fn skip(mut self, n: usize) -> Self {
        let n = n.min(self.documents.len());
        self.documents.drain(..n);
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn first(&self) -> Option<&Document> {
        self.documents.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Materializes the cursor into a vector of documents.
    pub fn to_vec(self) -> Vec<Document> {
        self.documents
    }
}

fn compare_field(a: &Document, b: &Document, field: &str) -> Ordering {
    match (a.get(field), b.get(field)) {
        (Some(x), Some(y)) => x.sort_cmp(y),
        (Some(x), None) => x.sort_cmp(&Value::Null),
        (None, Some(y)) => Value::Null.sort_cmp(y),
        (None, None) => Ordering::Equal,
    }
}

impl IntoIterator for DocumentCursor {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl<'a> IntoIterator for &'a DocumentCursor {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
