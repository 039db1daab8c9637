//! Derivation of a single general message when no field messages were found

use super::depth::{exceeds_depth, MAX_SERIALIZED_DEPTH};
use super::shape::{message_text, non_blank, Shape};
use serde_json::Value;

/// Keys that commonly carry a human message, in priority order
///
/// Dotted keys descend into nested objects.
pub const MESSAGE_KEYS: &[&str] = &[
    "message",
    "error",
    "detail",
    "description",
    "msg",
    "errorMessage",
    "general",
    "summary",
    "title",
    "text",
    "content",
];

/// Prefix for the last-resort serialized form
const SERIALIZED_PREFIX: &str = "Error: ";

/// Pick the best general message for `data`, falling back to `fallback`
pub fn derive_general_message(data: &Value, fallback: &str) -> String {
    if let Some(text) = data.as_str().and_then(non_blank) {
        return text.to_string();
    }

    if let Some(text) = MESSAGE_KEYS
        .iter()
        .filter_map(|key| lookup_path(data, key))
        .find_map(|value| value.as_str().and_then(non_blank))
    {
        return text.to_string();
    }

    first_entry_message(data)
        .or_else(|| serialized_message(data))
        .unwrap_or_else(|| fallback.to_string())
}

/// Follow a dotted path through nested objects
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.as_object()?.get(segment))
}

fn first_entry_message(data: &Value) -> Option<String> {
    let (_, first) = data.as_object()?.iter().next()?;
    match Shape::of(first) {
        Shape::Text(text) => non_blank(text).map(str::to_string),
        Shape::Sequence(items) => items.first().and_then(message_text),
        _ => None,
    }
}

fn serialized_message(data: &Value) -> Option<String> {
    // blank strings count as absent
    if data.is_string() {
        return None;
    }
    if exceeds_depth(data, MAX_SERIALIZED_DEPTH) {
        tracing::debug!(limit = MAX_SERIALIZED_DEPTH, "payload too deep to serialize");
        return None;
    }

    let serialized = match serde_json::to_string(data) {
        Ok(serialized) => serialized,
        Err(err) => {
            tracing::debug!(error = %err, "could not serialize error payload");
            return None;
        }
    };

    match serialized.as_str() {
        "{}" | "[]" | "" => None,
        _ => Some(format!("{}{}", SERIALIZED_PREFIX, serialized)),
    }
}
