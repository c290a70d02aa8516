//! One service per entity, each working on [bytebound::collection::DocumentStore]
//! handles.

mod comments;
mod likes;
mod posts;
mod users;

pub use comments::*;
pub use likes::*;
pub use posts::*;
pub use users::*;

use bytebound::collection::{Document, DocumentStore};
use bytebound::common::Value;
use bytebound::doc;

use crate::schema::PROTECTED_FIELDS;

/// A stored document together with an equality filter that selects it.
pub(crate) struct Located {
    pub(crate) document: Document,
    pub(crate) selector: Document,
}

/// Finds a document by its `id`, falling back to `_id` for records written
/// by older clients.
///
/// The selector carries the stored identity value, so it matches the
/// document under plain equality even when the caller's id only matched by
/// its text.
pub(crate) fn locate(store: &DocumentStore, id: &str) -> Option<Located> {
    for field in ["id", "_id"] {
        let mut filter = Document::new();
        filter.put(field, id);
        if let Some(document) = store.find_one(&filter) {
            let stored = document.get_or_null(field);
            let stored = if stored.is_null() { Value::from(id) } else { stored };
            let mut selector = Document::new();
            selector.put(field, stored);
            return Some(Located { document, selector });
        }
    }
    None
}

/// Copies `updates` without the identity fields and the extra `protected`
/// ones.
pub(crate) fn strip_fields(updates: &Document, protected: &[&str]) -> Document {
    updates
        .iter()
        .filter(|(key, _)| {
            !PROTECTED_FIELDS.contains(&key.as_str()) && !protected.contains(&key.as_str())
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Stored form of an author: a bare name becomes `{ name }`.
pub(crate) fn author_value(author: Value) -> Value {
    match author {
        Value::String(name) => Value::from(doc! { name: name }),
        other => other,
    }
}

pub(crate) fn inc(field: &str, by: i64) -> Document {
    let mut amounts = Document::new();
    amounts.put(field, by);
    doc! { "$inc": amounts }
}

/// Adds `by` to a counter on the post `blog_id`, found the way [locate]
/// finds it. Does nothing when the post is gone.
pub(crate) fn bump_counter(posts: &DocumentStore, blog_id: &str, field: &str, by: i64) {
    match locate(posts, blog_id) {
        Some(located) => {
            posts.update_one(&located.selector, &inc(field, by));
        }
        None => log::debug!("No post {} to adjust {} on", blog_id, field),
    }
}
