use crate::collection::Document;
use crate::common::{Value, OP_AND, OP_IN, OP_NE, OP_OPTIONS, OP_OR, OP_REGEX};

use super::{and, field, or, Filter};

impl Filter {
    /// Builds a filter from a MongoDB-style query document.
    ///
    /// Top-level pairs are AND-combined. A plain value means equality; an
    /// operator document (every key starts with `$`) may use `$ne`, `$in` and
    /// `$regex`/`$options`. `$or` and `$and` take arrays of nested queries.
    /// Unsupported operators, and operators given the wrong kind of argument,
    /// are logged and contribute no constraint.
    ///
    /// ```rust,ignore
    /// let filter = Filter::parse(&doc! {
    ///     "$or": [
    ///         { title: { "$regex": "rust", "$options": "i" } },
    ///         { tags: { "$in": ["rust"] } },
    ///     ],
    ///     status: "published",
    /// });
    /// ```
    pub fn parse(query: &Document) -> Filter {
        let mut filters = Vec::with_capacity(query.len());
        for (key, value) in query.iter() {
            match key.as_str() {
                OP_OR => match value.as_array() {
                    Some(branches) => filters.push(or(parse_branches(branches))),
                    None => log::warn!("Ignoring {} with non-array argument {}", OP_OR, value),
                },
                OP_AND => match value.as_array() {
                    Some(branches) => filters.push(and(parse_branches(branches))),
                    None => log::warn!("Ignoring {} with non-array argument {}", OP_AND, value),
                },
                op if op.starts_with('$') => {
                    log::warn!("Ignoring unsupported top-level operator {}", op)
                }
                _ => filters.extend(parse_field(key, value)),
            }
        }
        and(filters)
    }

    /// Builds a filter that requires every pair of the query to match by
    /// plain equality. Operator documents are compared literally.
    pub fn equality(query: &Document) -> Filter {
        and(query
            .iter()
            .map(|(key, value)| field(key).eq(value.clone()))
            .collect())
    }
}

/// Returns true when the value is a non-empty document whose keys are all
/// operators.
pub(crate) fn is_operator_document(value: &Value) -> bool {
    match value.as_document() {
        Some(doc) => !doc.is_empty() && doc.keys().all(|k| k.starts_with('$')),
        None => false,
    }
}

fn parse_branches(branches: &[Value]) -> Vec<Filter> {
    branches
        .iter()
        .filter_map(|branch| match branch.as_document() {
            Some(sub_query) => Some(Filter::parse(sub_query)),
            None => {
                log::warn!("Ignoring non-document logical branch {}", branch);
                None
            }
        })
        .collect()
}

fn parse_field(field_name: &str, value: &Value) -> Option<Filter> {
    let operators = match value.as_document() {
        Some(doc) if is_operator_document(value) => doc,
        _ => return Some(field(field_name).eq(value.clone())),
    };

    let mut filters = Vec::new();
    for (op, argument) in operators.iter() {
        match op.as_str() {
            OP_NE => filters.push(field(field_name).ne(argument.clone())),
            OP_IN => match argument.as_array() {
                Some(candidates) => filters.push(field(field_name).in_array(candidates.clone())),
                None => log::warn!(
                    "Ignoring {} on '{}' with non-array argument {}",
                    OP_IN,
                    field_name,
                    argument
                ),
            },
            OP_REGEX => {
                let options = operators
                    .get(OP_OPTIONS)
                    .map(Value::to_text)
                    .unwrap_or_default();
                filters.push(field(field_name).regex_with_options(&argument.to_text(), &options));
            }
            // consumed by $regex
            OP_OPTIONS => {}
            other => log::warn!("Ignoring unsupported operator {} on '{}'", other, field_name),
        }
    }

    if filters.is_empty() {
        None
    } else {
        Some(and(filters))
    }
}
