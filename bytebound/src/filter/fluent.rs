use crate::common::Value;

use super::{
    AllFilter, AndFilter, EqualsFilter, Filter, InFilter, NotEqualsFilter, OrFilter, RegexFilter,
};

/// Creates a fluent filter builder for the specified field name.
///
/// # Examples
///
/// ```rust,ignore
/// use bytebound::filter::field;
///
/// let published = field("status").eq("published");
/// let tagged = field("tags").in_array(vec!["rust", "db"]);
/// let filter = published.and(tagged);
/// ```
pub fn field(field_name: &str) -> FluentFilter {
    FluentFilter {
        field_name: field_name.to_string(),
    }
}

/// Creates a filter that matches every document.
pub fn all() -> Filter {
    Filter::new(AllFilter)
}

/// Combines filters so that all of them must match.
///
/// A single filter is returned as is, and no filters at all yields [all].
pub fn and(mut filters: Vec<Filter>) -> Filter {
    match filters.len() {
        0 => all(),
        1 => filters.remove(0),
        _ => Filter::new(AndFilter::new(filters)),
    }
}

/// Combines filters so that at least one of them must match.
///
/// Unlike [and], an empty list matches nothing.
pub fn or(filters: Vec<Filter>) -> Filter {
    Filter::new(OrFilter::new(filters))
}

/// A fluent builder for constructing filters on a specific field.
pub struct FluentFilter {
    field_name: String,
}

impl FluentFilter {
    /// Matches documents where the field equals the value.
    #[inline]
    pub fn eq<T: Into<Value>>(self, value: T) -> Filter {
        Filter::new(EqualsFilter::new(self.field_name, value.into()))
    }

    /// Matches documents where the field does not equal the value.
    #[inline]
    pub fn ne<T: Into<Value>>(self, value: T) -> Filter {
        Filter::new(NotEqualsFilter::new(self.field_name, value.into()))
    }

    /// Matches documents where the field, or any element of an array field,
    /// is one of the values.
    #[inline]
    pub fn in_array<T: Into<Value>>(self, values: Vec<T>) -> Filter {
        Filter::new(InFilter::new(
            self.field_name,
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// Matches documents where the field, rendered as text, matches the pattern.
    #[inline]
    pub fn regex(self, pattern: &str) -> Filter {
        self.regex_with_options(pattern, "")
    }

    /// Same as [FluentFilter::regex] with MongoDB-style option letters
    /// (`i`, `m`, `s`, `x`).
    #[inline]
    pub fn regex_with_options(self, pattern: &str, options: &str) -> Filter {
        Filter::new(RegexFilter::new(
            self.field_name,
            pattern.to_string(),
            options.to_string(),
        ))
    }
}

impl Filter {
    /// Combines this filter with another so that both must match.
    pub fn and(self, other: Filter) -> Filter {
        and(vec![self, other])
    }

    /// Combines this filter with another so that either may match.
    pub fn or(self, other: Filter) -> Filter {
        or(vec![self, other])
    }
}
