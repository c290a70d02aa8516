use crate::collection::Document;
use crate::common::{Value, OP_INC, OP_SET};

/// Applies an update document to `target` in place.
///
/// `$set` runs first and assigns each listed field. `$inc` runs second and
/// adds each numeric delta to the current value, treating a missing or null
/// field as 0. Integer plus integer stays an integer; a float on either side,
/// or an integer overflow, produces a float. Any other operator is ignored.
///
/// The identity field never changes: assignments or increments aimed at it
/// are dropped with a warning.
pub(crate) fn apply_update(target: &mut Document, update: &Document, identity_field: &str) {
    if let Some(assignments) = operator_argument(update, OP_SET) {
        for (key, value) in assignments.iter() {
            if key == identity_field {
                log::warn!("Ignoring {} on identity field '{}'", OP_SET, key);
                continue;
            }
            target.put(key.clone(), value.clone());
        }
    }

    if let Some(increments) = operator_argument(update, OP_INC) {
        for (key, delta) in increments.iter() {
            if key == identity_field {
                log::warn!("Ignoring {} on identity field '{}'", OP_INC, key);
                continue;
            }
            if !delta.is_number() {
                log::warn!("Ignoring non-numeric {} delta {} for '{}'", OP_INC, delta, key);
                continue;
            }

            let current = target.get_or_null(key);
            match increment(&current, delta) {
                Some(sum) => target.put(key.clone(), sum),
                None => log::warn!(
                    "Cannot apply {} to non-numeric field '{}' holding {}",
                    OP_INC,
                    key,
                    current
                ),
            }
        }
    }

    for op in update.keys() {
        if op != OP_SET && op != OP_INC {
            log::warn!("Ignoring unsupported update operator {}", op);
        }
    }
}

fn operator_argument<'a>(update: &'a Document, op: &str) -> Option<&'a Document> {
    let argument = update.get(op)?;
    match argument.as_document() {
        Some(doc) => Some(doc),
        None => {
            log::warn!("Ignoring {} with non-document argument {}", op, argument);
            None
        }
    }
}

fn increment(current: &Value, delta: &Value) -> Option<Value> {
    match (current, delta) {
        (Value::Null, _) => Some(delta.clone()),
        (Value::I64(a), Value::I64(b)) => Some(match a.checked_add(*b) {
            Some(sum) => Value::I64(sum),
            None => Value::F64(*a as f64 + *b as f64),
        }),
        (a, b) if a.is_number() => Some(Value::F64(
            a.as_f64().unwrap_or_default() + b.as_f64().unwrap_or_default(),
        )),
        _ => None,
    }
}
