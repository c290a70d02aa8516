use std::fmt::Display;

use crate::collection::Document;

use super::{Filter, FilterProvider};

fn join_filters(filters: &[Filter], separator: &str) -> String {
    let mut joined = String::with_capacity(filters.len() * 16);
    for (i, filter) in filters.iter().enumerate() {
        joined.push_str(&format!("{}", filter));
        if i < filters.len() - 1 {
            joined.push_str(separator);
        }
    }
    joined
}

/// A filter that applies logical AND operation on multiple filters.
///
/// Evaluation short-circuits on the first filter that fails. An AND over no
/// filters matches every document.
pub(crate) struct AndFilter {
    filters: Vec<Filter>,
}

impl AndFilter {
    pub(crate) fn new(filters: Vec<Filter>) -> Self {
        AndFilter { filters }
    }
}

impl Display for AndFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", join_filters(&self.filters, " && "))
    }
}

impl FilterProvider for AndFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> bool {
        self.filters.iter().all(|filter| filter.apply(entry))
    }
}

/// A filter that applies logical OR operation on multiple filters.
///
/// Evaluation short-circuits on the first filter that succeeds. An OR over no
/// filters matches nothing.
pub(crate) struct OrFilter {
    filters: Vec<Filter>,
}

impl OrFilter {
    pub(crate) fn new(filters: Vec<Filter>) -> Self {
        OrFilter { filters }
    }
}

impl Display for OrFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", join_filters(&self.filters, " || "))
    }
}

impl FilterProvider for OrFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> bool {
        self.filters.iter().any(|filter| filter.apply(entry))
    }
}
