//! Server validation-error flattening.

use std::collections::BTreeMap;

use serde_json::Value;

/// Flatten a nested server validation-error payload into one
/// field → message map, merged over `seed`.
///
/// Leaf arrays keep only their first message; arrays of nested error
/// objects (one per query) and plain nested objects are walked
/// recursively. The input is JSON-derived, so the walk terminates.
pub fn flatten_errors(
    errors: &Value,
    seed: BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut flat = seed;
    collect(errors, &mut flat);
    flat
}

fn collect(value: &Value, flat: &mut BTreeMap<String, String>) {
    let Value::Object(entries) = value else {
        return;
    };
    for (field, detail) in entries {
        match detail {
            Value::String(message) => {
                flat.insert(field.clone(), message.clone());
            }
            Value::Array(items) => match items.first() {
                Some(Value::String(message)) => {
                    flat.insert(field.clone(), message.clone());
                }
                Some(_) => {
                    for item in items {
                        collect(item, flat);
                    }
                }
                None => {}
            },
            Value::Object(_) => collect(detail, flat),
            _ => {}
        }
    }
}
