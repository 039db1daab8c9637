//! Shared helpers for error-normalizer integration tests

#![allow(dead_code)]

use error_normalizer::{ErrorMap, ReceivedResponse, TransportFailure};
use serde_json::{json, Map, Value};

/// Fallback used across the integration tests
pub const FALLBACK: &str = "Unable to complete the request.";

/// Build an ErrorMap from (field, message) pairs
pub fn error_map(entries: &[(&str, &str)]) -> ErrorMap {
    entries.iter().copied().collect()
}

/// Build an axios-style failure value with a received response
pub fn response_failure(status: u16, data: Value) -> Value {
    json!({
        "message": format!("Request failed with status code {}", status),
        "response": {"status": status, "data": data}
    })
}

/// Build a typed failure with a received response
pub fn typed_response_failure(status: u16, body: Value) -> TransportFailure {
    TransportFailure::with_response(ReceivedResponse::new(status, body))
}

/// Nest `leaf` under `levels` objects keyed "nested"
///
/// Built with plain map inserts so very deep payloads do not recurse.
pub fn deeply_nested(levels: usize, leaf: Value) -> Value {
    (0..levels).fold(leaf, |inner, _| {
        let mut object = Map::new();
        object.insert("nested".to_string(), inner);
        Value::Object(object)
    })
}

/// Drop a value level by level instead of through recursive destructors
pub fn dismantle(value: Value) {
    let mut pending = vec![value];
    while let Some(mut current) = pending.pop() {
        match &mut current {
            Value::Object(object) => {
                pending.extend(std::mem::take(object).into_iter().map(|(_, child)| child))
            }
            Value::Array(items) => pending.append(items),
            _ => {}
        }
    }
}

/// A representative set of adversarial payloads
pub fn assorted_payloads() -> Vec<Value> {
    vec![
        Value::Null,
        json!({}),
        json!([]),
        json!(""),
        json!("   "),
        json!(0),
        json!(3.5),
        json!(true),
        json!("plain string"),
        json!([null, 1, [], {}]),
        json!({"errors": null, "data": 0, "message": ""}),
        json!({"errors": {"user": {"email": "Invalid"}}}),
        json!({"a": [{"b": [{"c": []}]}]}),
        json!({"response": {"status": 500}}),
        json!({"code": "ECONNABORTED"}),
        deeply_nested(200, json!("too deep")),
    ]
}
