use bytebound::collection::Document;
use serde::Serialize;

use super::common::{count, format_author, format_date, identity_of, is_truthy, optional_text, text_or, Author};
use crate::normalize::normalize_post;
use crate::schema::{DEFAULT_TITLE, STATUS_PUBLISHED};

/// A blog post as presented to readers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub author: Author,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub published: bool,
    pub featured: bool,
    pub status: String,
    pub tags: Vec<String>,
    pub category: String,
    pub slug: String,
    pub likes_count: i64,
    pub comments_count: i64,
    pub views_count: i64,
    pub reading_time: i64,
    pub featured_image: String,
    /// First non-empty of `featured_image`, `image` and `image_url`.
    pub image: String,
}

impl Post {
    /// Builds a post from a stored document, filling defaults for anything
    /// missing. Content, category and tags go through
    /// [crate::normalize::normalize_post].
    pub fn from_document(document: &Document) -> Post {
        let normalized = normalize_post(document);
        let image = ["featured_image", "image", "image_url"]
            .iter()
            .filter_map(|field| optional_text(document, field))
            .find(|image| !image.is_empty())
            .unwrap_or_default();

        Post {
            id: identity_of(document),
            title: text_or(document, "title", DEFAULT_TITLE),
            content: normalized.text,
            excerpt: text_or(document, "excerpt", ""),
            user_id: optional_text(document, "user_id"),
            author: format_author(document.get("author")),
            created_at: format_date(document.get("created_at")),
            updated_at: optional_text(document, "updated_at")
                .map(|_| format_date(document.get("updated_at"))),
            published: document.get("published").and_then(|v| v.as_bool()) != Some(false),
            featured: is_truthy(document.get("featured")),
            status: text_or(document, "status", STATUS_PUBLISHED),
            tags: normalized.tags,
            category: normalized.category,
            slug: text_or(document, "slug", ""),
            likes_count: count(document, "likes_count"),
            comments_count: count(document, "comments_count"),
            views_count: count(document, "views_count"),
            reading_time: count(document, "reading_time"),
            featured_image: text_or(document, "featured_image", ""),
            image,
        }
    }
}
