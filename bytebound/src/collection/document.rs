use crate::common::Value;
use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use std::fmt::{Debug, Formatter};

/// Represents a document stored in a collection.
///
/// A document is an insertion-ordered mapping from field name to [Value]. It
/// has no schema; the only distinguished field is the identity field
/// configured on the database (`id` by default), which the store fills in on
/// insertion when it is missing.
///
/// Documents serialize as plain JSON objects, so a collection persists as a
/// JSON array of objects.
///
/// Two documents are equal when they hold the same fields with equal values,
/// regardless of field order.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Document {
    data: IndexMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Associates the specified value with the specified key in this document.
    ///
    /// An existing key keeps its position and has its value replaced; a new
    /// key is appended after the existing ones.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut doc = Document::new();
    /// doc.put("title", "Hello");
    /// doc.put("likes_count", 0);
    /// assert_eq!(doc.len(), 2);
    /// ```
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }

    /// Returns the value for the key, or `None` if the field is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Returns the value for the key, treating an absent field as [Value::Null].
    pub fn get_or_null(&self, key: &str) -> Value {
        self.data.get(key).cloned().unwrap_or(Value::Null)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.data.get_mut(key)
    }

    /// Removes the key from this document and returns its value.
    ///
    /// The remaining fields keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.data.iter()
    }

    /// Returns the string value of the field, if the field holds a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Merges all fields of `other` into this document, overwriting existing keys.
    pub fn merge(&mut self, other: &Document) {
        for (key, value) in other.iter() {
            self.data.insert(key.clone(), value.clone());
        }
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Document {
            data: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Strips the quotes `stringify!` leaves around string-literal keys.
#[doc(hidden)]
pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// Creates a [Document] with JSON-like syntax.
///
/// Keys may be bare identifiers or string literals; operator keys such as
/// `"$set"` must be string literals. Negative numbers need parentheses.
///
/// # Examples
///
/// ```rust
/// use bytebound::doc;
///
/// let empty = doc!{};
/// assert!(empty.is_empty());
///
/// let post = doc!{
///     title: "Hello",
///     tags: ["rust", "db"],
///     author: { name: "Ada" },
/// };
/// assert_eq!(post.len(), 3);
///
/// let update = doc!{ "$inc": { likes_count: (-1) } };
/// assert!(update.contains_key("$inc"));
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::collection::Document::new()
    };

    ($($key:tt : $value:tt),* $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::doc_value;

            let mut doc = $crate::collection::Document::new();
            $(
                doc.put($crate::collection::normalize(stringify!($key)), $crate::doc_value!($value));
            )*
            doc
        }
    };
}

/// Helper macro to convert values for the doc! macro.
/// Handles nested documents, arrays, and expressions.
#[macro_export]
macro_rules! doc_value {
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
    };

    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
