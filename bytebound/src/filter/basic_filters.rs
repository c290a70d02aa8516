use std::fmt::Display;

use itertools::Itertools;

use crate::{collection::Document, common::Value};

use super::FilterProvider;

/// A filter that matches all documents.
///
/// Produced for an empty query, and for a query whose every condition was
/// ignored as unsupported.
pub(crate) struct AllFilter;

impl FilterProvider for AllFilter {
    fn apply(&self, _entry: &Document) -> bool {
        true
    }
}

impl Display for AllFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllFilter")
    }
}

/// A filter that matches documents where a field equals a specific value.
///
/// A missing field is treated as null, so `{cover: null}` also matches
/// documents without a `cover` field. Arrays and nested documents compare
/// structurally.
pub(crate) struct EqualsFilter {
    field_name: String,
    field_value: Value,
}

impl EqualsFilter {
    pub(crate) fn new(field_name: String, field_value: Value) -> Self {
        EqualsFilter {
            field_name,
            field_value,
        }
    }
}

impl Display for EqualsFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} == {})", self.field_name, self.field_value)
    }
}

impl FilterProvider for EqualsFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> bool {
        match entry.get(&self.field_name) {
            Some(value) => value == &self.field_value,
            None => self.field_value.is_null(),
        }
    }
}

/// A filter that excludes documents where a field equals a specific value.
///
/// Documents lacking the field are kept unless the excluded value is null.
pub(crate) struct NotEqualsFilter {
    field_name: String,
    field_value: Value,
}

impl NotEqualsFilter {
    pub(crate) fn new(field_name: String, field_value: Value) -> Self {
        NotEqualsFilter {
            field_name,
            field_value,
        }
    }
}

impl Display for NotEqualsFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} != {})", self.field_name, self.field_value)
    }
}

impl FilterProvider for NotEqualsFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> bool {
        entry.get_or_null(&self.field_name) != self.field_value
    }
}

/// A filter that matches documents where a field holds one of several values.
///
/// When the field holds an array (tags, for example) the document matches if
/// any element of the array is one of the candidates. Otherwise the field
/// value itself must be one of the candidates.
pub(crate) struct InFilter {
    field_name: String,
    candidates: Vec<Value>,
}

impl InFilter {
    pub(crate) fn new(field_name: String, candidates: Vec<Value>) -> Self {
        InFilter {
            field_name,
            candidates,
        }
    }

    fn is_candidate(&self, value: &Value) -> bool {
        self.candidates.iter().any(|candidate| candidate == value)
    }
}

impl Display for InFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} in [{}])",
            self.field_name,
            self.candidates.iter().map(|c| c.to_string()).join(", ")
        )
    }
}

impl FilterProvider for InFilter {
    fn apply(&self, entry: &Document) -> bool {
        match entry.get_or_null(&self.field_name) {
            Value::Array(elements) => elements.iter().any(|e| self.is_candidate(e)),
            value => self.is_candidate(&value),
        }
    }
}
