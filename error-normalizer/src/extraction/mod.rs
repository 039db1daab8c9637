//! Field-message extraction from arbitrary error payloads
//!
//! The extractor accepts any `serde_json::Value`, unwraps one known envelope,
//! walks the remaining structure collecting dotted field paths, and falls
//! back to a single general message when nothing field-shaped was found.
//! It is pure: the same input always yields the same `ErrorMap`.

pub mod depth;
pub mod general;
pub mod shape;
pub mod walker;

use crate::config::validator::MAX_ALLOWED_DEPTH;
use crate::error::Result;
use crate::messages::{DEFAULT_FALLBACK_MESSAGE, GENERAL_KEY};
use crate::types::ErrorMap;
use serde_json::Value;

pub use depth::{clone_within_depth, exceeds_depth, MAX_SERIALIZED_DEPTH};
pub use general::{derive_general_message, lookup_path, MESSAGE_KEYS};
pub use shape::Shape;
pub use walker::{Walker, CONTAINER_KEYS};

/// Default maximum recursion depth for the field walk
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Extracts an `ErrorMap` from untyped payloads
#[derive(Debug, Clone)]
pub struct Extractor {
    max_depth: usize,
    default_fallback: String,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, DEFAULT_FALLBACK_MESSAGE)
    }
}

impl Extractor {
    /// Create an extractor with a depth limit and a default fallback message
    pub fn new<S: Into<String>>(max_depth: usize, default_fallback: S) -> Self {
        let default_fallback = default_fallback.into();
        let default_fallback = match default_fallback.trim() {
            "" => DEFAULT_FALLBACK_MESSAGE.to_string(),
            trimmed => trimmed.to_string(),
        };

        Self {
            max_depth: max_depth.min(MAX_ALLOWED_DEPTH),
            default_fallback,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The fallback that will actually be used for a caller-supplied one
    pub fn effective_fallback<'a>(&'a self, fallback: &'a str) -> &'a str {
        match fallback.trim() {
            "" => &self.default_fallback,
            trimmed => trimmed,
        }
    }

    /// Extract field messages from `value`
    ///
    /// The returned map is never empty.
    pub fn extract(&self, value: &Value, fallback: &str) -> ErrorMap {
        let fallback = self.effective_fallback(fallback);

        if value.is_null() {
            return ErrorMap::general_only(fallback);
        }

        let data = unwrap_envelope(value);
        let mut map = ErrorMap::new();
        Walker::new(&mut map, self.max_depth).walk(data, None, 0);

        if map.is_empty() {
            map.insert(GENERAL_KEY, derive_general_message(data, fallback));
        }
        map
    }
}

/// Take the first truthy envelope field, else the value itself
///
/// Priority: response body, `data`, `message`, `error`.
pub fn unwrap_envelope(value: &Value) -> &Value {
    [
        value.pointer("/response/data"),
        value.pointer("/response/body"),
        value.get("data"),
        value.get("message"),
        value.get("error"),
    ]
    .into_iter()
    .flatten()
    .find(|candidate| shape::is_truthy(candidate))
    .unwrap_or(value)
}

/// Decode error text read from a response body or a file
///
/// JSON is parsed, blank text is `Null` and any other text becomes a string
/// payload. Text that opens like a JSON object or array but does not parse
/// (malformed, or nested past the parser's recursion limit) is an error.
pub fn parse_payload(text: &str) -> Result<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }

    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(value),
        Err(err) if trimmed.starts_with(['{', '[']) => Err(err.into()),
        Err(_) => Ok(Value::String(trimmed.to_string())),
    }
}
