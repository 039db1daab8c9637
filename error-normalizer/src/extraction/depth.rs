//! Depth guards for operations that recurse over a whole payload
//!
//! The field walk has its own limit; these bound the last-resort
//! serialization and the copies taken when a failure is typed.

use serde_json::{Map, Value};

/// Deepest container nesting that is still serialized or copied in full
///
/// Matches the recursion limit `serde_json` applies when parsing.
pub const MAX_SERIALIZED_DEPTH: usize = 128;

/// Whether `value` nests arrays or objects more than `limit` levels deep
///
/// Iterative, so arbitrarily deep input cannot exhaust the stack.
pub fn exceeds_depth(value: &Value, limit: usize) -> bool {
    let mut pending = vec![(value, 1usize)];

    while let Some((current, depth)) = pending.pop() {
        match current {
            Value::Array(items) if !items.is_empty() => {
                if depth > limit {
                    return true;
                }
                pending.extend(items.iter().map(|item| (item, depth + 1)));
            }
            Value::Object(object) if !object.is_empty() => {
                if depth > limit {
                    return true;
                }
                pending.extend(object.values().map(|child| (child, depth + 1)));
            }
            _ => {}
        }
    }

    false
}

/// Clone `value`, replacing containers nested deeper than `limit` with `Null`
pub fn clone_within_depth(value: &Value, limit: usize) -> Value {
    match value {
        Value::Array(items) if !items.is_empty() => {
            if limit == 0 {
                return Value::Null;
            }
            Value::Array(items.iter().map(|item| clone_within_depth(item, limit - 1)).collect())
        }
        Value::Object(object) if !object.is_empty() => {
            if limit == 0 {
                return Value::Null;
            }
            let copy: Map<String, Value> = object
                .iter()
                .map(|(key, child)| (key.clone(), clone_within_depth(child, limit - 1)))
                .collect();
            Value::Object(copy)
        }
        other => other.clone(),
    }
}
