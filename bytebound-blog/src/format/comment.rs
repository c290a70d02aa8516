use bytebound::collection::Document;
use serde::Serialize;

use super::common::{count, format_author, format_date, identity_of, optional_text, text_or, Author};

const KNOWN_FIELDS: [&str; 10] = [
    "id",
    "_id",
    "blog_id",
    "user_id",
    "parent_id",
    "content",
    "author",
    "created_at",
    "updated_at",
    "likes_count",
];

/// A comment on a post.
///
/// Fields the store holds beyond the known ones are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: String,
    pub blog_id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub content: String,
    pub author: Author,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub likes_count: i64,
    #[serde(flatten)]
    pub extra: Document,
}

impl Comment {
    pub fn from_document(document: &Document) -> Comment {
        let mut extra = document.clone();
        for field in KNOWN_FIELDS {
            extra.remove(field);
        }

        Comment {
            id: identity_of(document),
            blog_id: text_or(document, "blog_id", ""),
            user_id: text_or(document, "user_id", ""),
            parent_id: optional_text(document, "parent_id"),
            content: text_or(document, "content", ""),
            author: format_author(document.get("author")),
            created_at: format_date(document.get("created_at")),
            updated_at: optional_text(document, "updated_at")
                .map(|_| format_date(document.get("updated_at"))),
            likes_count: count(document, "likes_count"),
            extra,
        }
    }
}
