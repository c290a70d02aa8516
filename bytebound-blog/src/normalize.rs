//! Recovery of post text, category and tags from the `content` field.
//!
//! Some clients store a post's content as a JSON envelope instead of plain
//! text:
//!
//! ```json
//! {"text": "...", "metadata": {"category": "Rust", "tags": ["db"]}}
//! ```
//!
//! [normalize_post] is the only place that looks inside such envelopes. The
//! fallback order is:
//!
//! | part | order |
//! |---|---|
//! | text | envelope `text`, envelope `content`, raw `content` |
//! | category | envelope `metadata.category`, document `category`, envelope `category`, `"Uncategorized"` |
//! | tags | envelope `metadata.tags`, document `tags`, envelope `tags`, empty |
//!
//! Empty strings and empty tag lists do not count as present.

use bytebound::collection::Document;
use bytebound::common::Value;

use crate::schema::DEFAULT_CATEGORY;

/// Text, category and tags of a post after envelope recovery.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPost {
    pub text: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// Resolves the displayed text, category and tags of a post document.
pub fn normalize_post(post: &Document) -> NormalizedPost {
    let raw = post.get("content");
    let envelope = raw.and_then(parse_envelope);
    let metadata = envelope
        .as_ref()
        .and_then(|envelope| envelope.get("metadata"))
        .and_then(Value::as_document);

    let text = envelope
        .as_ref()
        .and_then(|envelope| {
            envelope
                .get_str("text")
                .or_else(|| envelope.get_str("content"))
                .map(str::to_string)
        })
        .or_else(|| raw.and_then(Value::as_str).map(str::to_string))
        .unwrap_or_default();

    let category = metadata
        .and_then(|metadata| non_empty_str(metadata.get("category")))
        .or_else(|| non_empty_str(post.get("category")))
        .or_else(|| {
            envelope
                .as_ref()
                .and_then(|envelope| non_empty_str(envelope.get("category")))
        })
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string();

    let tags = metadata
        .and_then(|metadata| tag_list(metadata.get("tags")))
        .or_else(|| tag_list(post.get("tags")))
        .or_else(|| {
            envelope
                .as_ref()
                .and_then(|envelope| tag_list(envelope.get("tags")))
        })
        .unwrap_or_default();

    NormalizedPost {
        text,
        category,
        tags,
    }
}

/// A content value holding a JSON object, either embedded as text or stored
/// as a nested document.
fn parse_envelope(content: &Value) -> Option<Document> {
    match content {
        Value::Document(document) => Some(document.clone()),
        Value::String(text) if text.trim_start().starts_with('{') => {
            match serde_json::from_str::<Value>(text) {
                Ok(Value::Document(document)) => Some(document),
                Ok(_) => None,
                Err(err) => {
                    log::debug!("Content is not a JSON envelope: {}", err);
                    None
                }
            }
        }
        _ => None,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn tag_list(value: Option<&Value>) -> Option<Vec<String>> {
    let tags: Vec<String> = value?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}
