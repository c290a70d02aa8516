use bytebound::collection::Document;
use bytebound::common::Value;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;

use crate::schema::ANONYMOUS;

/// The author block shown with posts and comments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Author {
    pub fn new(name: &str) -> Self {
        Author {
            name: name.to_string(),
            avatar: None,
        }
    }

    pub fn anonymous() -> Self {
        Author::new(ANONYMOUS)
    }
}

/// Current time as an RFC 3339 UTC timestamp with millisecond precision.
pub fn now() -> String {
    render(Utc::now())
}

fn render(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Renders a stored date as an RFC 3339 UTC timestamp.
///
/// Accepts RFC 3339 strings, plain `YYYY-MM-DD` dates and epoch
/// milliseconds. Anything else, including a missing value, renders as the
/// current time.
pub fn format_date(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) if !text.is_empty() => {
            if let Ok(date) = DateTime::parse_from_rfc3339(text) {
                return render(date.with_timezone(&Utc));
            }
            if let Some(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
            {
                return render(date.and_utc());
            }
            log::warn!("Unrecognized date '{}', using the current time", text);
            now()
        }
        Some(Value::I64(millis)) => DateTime::from_timestamp_millis(*millis)
            .map(render)
            .unwrap_or_else(now),
        Some(Value::F64(millis)) => DateTime::from_timestamp_millis(*millis as i64)
            .map(render)
            .unwrap_or_else(now),
        _ => now(),
    }
}

/// Builds an [Author] from a stored author value.
///
/// A string is taken as the name. A document keeps its `avatar` and falls
/// back to `Anonymous` when it has no usable `name`, as does any other value.
pub fn format_author(value: Option<&Value>) -> Author {
    match value {
        Some(Value::String(name)) if !name.is_empty() => Author::new(name),
        Some(Value::Document(author)) => {
            let name = author
                .get_str("name")
                .filter(|name| !name.is_empty())
                .unwrap_or(ANONYMOUS);
            Author {
                name: name.to_string(),
                avatar: author.get_str("avatar").map(str::to_string),
            }
        }
        _ => Author::anonymous(),
    }
}

/// The field rendered as text, or `default` when it is missing or null.
pub(crate) fn text_or(document: &Document, field: &str, default: &str) -> String {
    match document.get(field) {
        Some(value) if !value.is_null() => value.to_text(),
        _ => default.to_string(),
    }
}

/// The field as text when it is present and not null.
pub(crate) fn optional_text(document: &Document, field: &str) -> Option<String> {
    match document.get(field) {
        Some(value) if !value.is_null() => Some(value.to_text()),
        _ => None,
    }
}

/// A counter field; missing and non-numeric values count as zero.
pub(crate) fn count(document: &Document, field: &str) -> i64 {
    match document.get(field) {
        Some(Value::I64(i)) => *i,
        Some(Value::F64(f)) if f.is_finite() => *f as i64,
        _ => 0,
    }
}

/// Loose truthiness, as used by flags written by older clients.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::I64(i)) => *i != 0,
        Some(Value::F64(f)) => *f != 0.0 && !f.is_nan(),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Document(_)) => true,
    }
}

/// The document's identity: `id`, then `_id`, then a fresh uuid.
pub(crate) fn identity_of(document: &Document) -> String {
    optional_text(document, "id")
        .or_else(|| optional_text(document, "_id"))
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}
