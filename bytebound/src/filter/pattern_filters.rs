use regex::{Regex, RegexBuilder};
use std::fmt::Display;

use crate::collection::Document;

use super::FilterProvider;

/// A filter that matches documents using regular expressions.
///
/// The field is rendered as text before matching (see
/// [`crate::common::Value::to_text`]), so a missing field is tested as the
/// empty string and a tag array as its comma-joined elements.
///
/// The pattern is compiled once. Options follow MongoDB's `$options` letters:
/// `i` case-insensitive, `m` multi-line, `s` dot matches newline and `x`
/// extended whitespace; other letters are ignored. An invalid pattern is
/// logged and the filter matches nothing.
pub(crate) struct RegexFilter {
    field_name: String,
    field_value: String,
    options: String,
    pattern: Option<Regex>,
}

impl RegexFilter {
    pub(crate) fn new(field_name: String, field_value: String, options: String) -> Self {
        let mut builder = RegexBuilder::new(&field_value);
        for flag in options.chars() {
            match flag {
                'i' => builder.case_insensitive(true),
                'm' => builder.multi_line(true),
                's' => builder.dot_matches_new_line(true),
                'x' => builder.ignore_whitespace(true),
                other => {
                    log::warn!("Ignoring unsupported regex option '{}'", other);
                    continue;
                }
            };
        }

        let pattern = match builder.build() {
            Ok(regex) => Some(regex),
            Err(e) => {
                log::error!("Invalid regex pattern '{}': {}", field_value, e);
                None
            }
        };

        RegexFilter {
            field_name,
            field_value,
            options,
            pattern,
        }
    }
}

impl Display for RegexFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} =~ /{}/{})", self.field_name, self.field_value, self.options)
    }
}

impl FilterProvider for RegexFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(&entry.get_or_null(&self.field_name).to_text()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc;

    #[test]
    fn test_case_insensitive_substring() {
        let filter = RegexFilter::new("title".to_string(), "rust".to_string(), "i".to_string());
        assert!(filter.apply(&doc! { title: "Learning RUST the hard way" }));
        assert!(!filter.apply(&doc! { title: "Learning Go" }));
    }

    #[test]
    fn test_case_sensitive_without_options() {
        let filter = RegexFilter::new("title".to_string(), "rust".to_string(), String::new());
        assert!(!filter.apply(&doc! { title: "RUST" }));
        assert!(filter.apply(&doc! { title: "trust" }));
    }

    #[test]
    fn test_field_is_coerced_to_text() {
        let filter = RegexFilter::new("tags".to_string(), "^a,b$".to_string(), String::new());
        assert!(filter.apply(&doc! { tags: ["a", "b"] }));

        let filter = RegexFilter::new("views".to_string(), "^10".to_string(), String::new());
        assert!(filter.apply(&doc! { views: 100 }));
    }

    #[test]
    fn test_missing_field_is_empty_text() {
        let filter = RegexFilter::new("content".to_string(), "^$".to_string(), String::new());
        assert!(filter.apply(&doc! { title: "no content" }));

        let filter = RegexFilter::new("content".to_string(), "x".to_string(), String::new());
        assert!(!filter.apply(&doc! { title: "no content" }));
    }

    #[test]
    fn test_invalid_pattern_matches_nothing() {
        let filter = RegexFilter::new("title".to_string(), "c++(".to_string(), "i".to_string());
        assert!(!filter.apply(&doc! { title: "c++(" }));
    }

    #[test]
    fn test_multi_line_option() {
        let filter = RegexFilter::new("content".to_string(), "^second".to_string(), "m".to_string());
        assert!(filter.apply(&doc! { content: "first\nsecond" }));

        let filter = RegexFilter::new("content".to_string(), "^second".to_string(), String::new());
        assert!(!filter.apply(&doc! { content: "first\nsecond" }));
    }
}
