use crate::collection::Document;
use std::fmt::{Debug, Display};
use std::ops::Deref;
use std::sync::Arc;

/// Trait for implementing filters.
///
/// A `FilterProvider` decides whether a document matches one condition of a
/// query. Evaluation is total: a field that is missing or holds an unexpected
/// kind of value simply does not match, it never raises.
pub trait FilterProvider: Send + Sync + Display {
    /// Applies the filter to a document and returns whether it matches.
    fn apply(&self, entry: &Document) -> bool;
}

/// A cheaply cloneable handle to a filter.
///
/// Filters are built from query documents with [`Filter::parse`] (full
/// operator support, used by `find`) or [`Filter::equality`] (plain field
/// equality, used by `find_one`, `update_one`, `delete_one` and
/// `count_documents`).
///
/// # Examples
///
/// ```rust,ignore
/// use bytebound::doc;
/// use bytebound::filter::Filter;
///
/// let filter = Filter::parse(&doc! {
///     status: { "$ne": "archived" },
///     tags: { "$in": ["rust"] },
/// });
/// assert!(filter.apply(&doc! { status: "published", tags: ["rust", "db"] }));
/// ```
#[derive(Clone)]
pub struct Filter {
    inner: Arc<dyn FilterProvider>,
}

impl Filter {
    /// Wraps a filter provider implementation.
    pub fn new<T: FilterProvider + 'static>(inner: T) -> Self {
        Filter {
            inner: Arc::new(inner),
        }
    }
}

impl Deref for Filter {
    type Target = Arc<dyn FilterProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Debug for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Filter({})", self.inner)
    }
}
