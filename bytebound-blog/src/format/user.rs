use bytebound::collection::Document;
use serde::Serialize;

use super::common::{format_date, identity_of, optional_text};

/// A user profile.
///
/// Only the identity and timestamps are normalized; every other stored
/// field is passed through in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub fields: Document,
}

impl User {
    pub fn from_document(document: &Document) -> User {
        let mut fields = document.clone();
        for field in ["id", "_id", "created_at", "updated_at"] {
            fields.remove(field);
        }

        User {
            id: identity_of(document),
            created_at: format_date(document.get("created_at")),
            updated_at: optional_text(document, "updated_at")
                .map(|_| format_date(document.get("updated_at"))),
            fields,
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.fields.get_str("username")
    }

    pub fn email(&self) -> Option<&str> {
        self.fields.get_str("email")
    }
}
