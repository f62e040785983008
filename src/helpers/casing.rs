//! Deep key normalization for upstream JSON payloads.
//!
//! The service mixes `snake_case`, `camelCase` with upper-case acronyms
//! (`equifaxUSConsumerCreditReport`) and the odd `PascalCase` key. Every
//! payload is rewritten to plain lower camel case before callers see it.

use serde_json::{Map, Value};

/// Recursively rewrite every object key in `value` to lower camel case.
/// Arrays are walked element-wise, scalars are returned untouched.
pub fn camelcase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (to_camel_case(&k), camelcase_keys(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(camelcase_keys).collect()),
        scalar => scalar,
    }
}

pub fn to_camel_case(key: &str) -> String {
    let words = split_words(key);
    let mut out = String::with_capacity(key.len());
    for (idx, word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        if idx == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Split on separators and on case transitions.
///
/// `fooBar` -> foo|Bar, `USConsumer` -> US|Consumer, `line1` stays whole.
fn split_words(key: &str) -> Vec<String> {
    let chars: Vec<char> = key.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '_' | '-' | '.' | ' ') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
