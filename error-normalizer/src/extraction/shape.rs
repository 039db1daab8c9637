//! Runtime shape inspection for untyped payload values

use serde_json::{Map, Value};

/// Closed set of shapes the extractor distinguishes at each step
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Null,
    Text(&'a str),
    Sequence(&'a [Value]),
    Mapping(&'a Map<String, Value>),
    /// Numbers and booleans
    Scalar(&'a Value),
}

impl<'a> Shape<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Null => Shape::Null,
            Value::String(text) => Shape::Text(text),
            Value::Array(items) => Shape::Sequence(items),
            Value::Object(object) => Shape::Mapping(object),
            Value::Bool(_) | Value::Number(_) => Shape::Scalar(value),
        }
    }
}

/// Trimmed text, or None when blank
pub fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Loose truthiness used when picking envelopes and containers
///
/// Null, `false`, zero and the empty string are falsy. Empty arrays and
/// objects are truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Values worth reporting against a field: non-blank strings, non-empty arrays, objects
pub fn is_error_like(value: &Value) -> bool {
    match Shape::of(value) {
        Shape::Text(text) => non_blank(text).is_some(),
        Shape::Sequence(items) => !items.is_empty(),
        Shape::Mapping(_) => true,
        Shape::Null | Shape::Scalar(_) => false,
    }
}

/// Human-readable form of a single value
///
/// Strings are trimmed, scalars use their display form, objects contribute
/// their `message` attribute. Everything else has no message.
pub fn message_text(value: &Value) -> Option<String> {
    match Shape::of(value) {
        Shape::Text(text) => non_blank(text).map(str::to_string),
        Shape::Scalar(scalar) => Some(scalar.to_string()),
        Shape::Mapping(object) => object
            .get("message")
            .and_then(Value::as_str)
            .and_then(non_blank)
            .map(str::to_string),
        Shape::Null | Shape::Sequence(_) => None,
    }
}

/// Message carried by an object's `message` attribute, else its `error` attribute
pub fn attribute_message(object: &Map<String, Value>) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| object.get(*key))
        .find_map(message_text)
}

/// Join the reportable items of an array with ", "
///
/// Only non-blank strings and objects carrying a `message` survive.
pub fn join_messages(items: &[Value]) -> Option<String> {
    let messages: Vec<String> = items
        .iter()
        .filter_map(|item| match Shape::of(item) {
            Shape::Text(text) => non_blank(text).map(str::to_string),
            Shape::Mapping(_) => message_text(item),
            _ => None,
        })
        .collect();

    (!messages.is_empty()).then(|| messages.join(", "))
}
