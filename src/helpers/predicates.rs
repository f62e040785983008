//! Two deliberately different notions of "nothing there".
//!
//! `is_present` decides whether a query parameter is put on the URL: only
//! null and an empty list are dropped, `false`, `0` and `""` are sent.
//! `is_empty` is the general emptiness check used on payloads and input
//! fields: empty strings and empty objects count as empty too.

use serde_json::{Map, Value};

pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// `is_empty` for optional input strings.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Recursively drop object entries whose value `is_empty`.
///
/// Arrays are mapped element-wise but never filtered, so positions survive.
pub fn remove_empty(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(remove_empty).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !is_empty(v))
                .map(|(k, v)| (k, remove_empty(v)))
                .collect::<Map<String, Value>>(),
        ),
        scalar => scalar,
    }
}
