use crate::messages::GENERAL_KEY;
use crate::extraction::{clone_within_depth, MAX_SERIALIZED_DEPTH};

/// Depth kept when copying payloads into typed failures
///
/// One level past the serialization limit, so a copy of a too-deep payload
/// is still too deep to serialize.
const COPY_DEPTH: usize = MAX_SERIALIZED_DEPTH + 1;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized errors: field path -> human-readable message
///
/// Keys are dotted paths for nested fields, or `"general"` for messages that
/// cannot be attributed to a field. Values are always trimmed and non-empty.
/// Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
    entries: IndexMap<String, String>,
}

impl ErrorMap {
    /// Create an empty error map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map holding only a general message
    pub fn general_only<S: Into<String>>(message: S) -> Self {
        let mut map = Self::new();
        map.insert(GENERAL_KEY, message);
        map
    }

    /// Insert a message, trimming it; blank messages are ignored
    ///
    /// Returns true if the message was stored.
    pub fn insert<K, V>(&mut self, field: K, message: V) -> bool
    where
        K: Into<String>,
        V: Into<String>,
    {
        let message = message.into();
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.entries.insert(field.into(), trimmed.to_string());
        true
    }

    /// Remove the message for a field
    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.entries.shift_remove(field)
    }

    /// Remove every message
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the message for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    /// Get the general (non-field) message
    pub fn general(&self) -> Option<&str> {
        self.get(GENERAL_KEY)
    }

    /// Check whether a field has a message
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// First message in insertion order
    pub fn first_message(&self) -> Option<&str> {
        self.entries.values().next().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether the map is exactly `{general: message}`
    pub fn is_only_general(&self, message: &str) -> bool {
        self.len() == 1 && self.general() == Some(message)
    }

    /// Iterate over (field, message) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Field names in insertion order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (field, message) in iter {
            map.insert(field, message);
        }
        map
    }
}

/// A response that was received from the remote side
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedResponse {
    pub status: u16,
    pub status_text: Option<String>,
    /// Response body of arbitrary shape (`Null` when absent)
    pub body: Value,
}

impl ReceivedResponse {
    /// Create a response with a body and no status text
    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            status_text: None,
            body,
        }
    }

    /// Set the status text
    #[must_use]
    pub fn with_status_text<S: Into<String>>(mut self, status_text: S) -> Self {
        self.status_text = Some(status_text.into());
        self
    }
}

/// A failure at the transport level: either no response, or a response with a status
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportFailure {
    /// Transport-level code such as `ECONNABORTED`
    pub code: Option<String>,
    /// Low-level error description, kept for diagnostics only
    pub message: Option<String>,
    pub response: Option<ReceivedResponse>,
}

impl TransportFailure {
    /// A failure where no response was received
    pub fn no_response<S: Into<String>>(code: S) -> Self {
        Self {
            code: Some(code.into()),
            message: None,
            response: None,
        }
    }

    /// A failure carrying a received response
    pub fn with_response(response: ReceivedResponse) -> Self {
        Self {
            code: None,
            message: None,
            response: Some(response),
        }
    }

    /// Read a transport failure out of an untyped error value
    ///
    /// Returns None unless the value has a string `code` or a `response`
    /// object with a numeric `status`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let code = value
            .get("code")
            .and_then(Value::as_str)
            .map(str::to_string);
        let response = value.get("response").and_then(received_response_from_value);

        if code.is_none() && response.is_none() {
            return None;
        }

        Some(Self {
            code,
            message: value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            response,
        })
    }

    /// Status code of the received response, if any
    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.status)
    }
}

/// Input accepted by the classifier
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// Looks like an HTTP client failure (has a code or a response status)
    Transport(TransportFailure),
    /// Anything else; goes straight to the extractor
    Raw(Value),
}

impl Failure {
    /// Inspect an untyped error value and decide whether it is a transport failure
    ///
    /// A value is a transport failure when it has a string `code` or a
    /// `response` object with a numeric `status`.
    pub fn from_value(value: &Value) -> Self {
        match TransportFailure::from_value(value) {
            Some(transport) => Failure::Transport(transport),
            None => Failure::Raw(clone_within_depth(value, COPY_DEPTH)),
        }
    }

    /// Check whether this is a transport failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Failure::Transport(_))
    }
}

impl From<TransportFailure> for Failure {
    fn from(failure: TransportFailure) -> Self {
        Failure::Transport(failure)
    }
}

impl From<Value> for Failure {
    fn from(value: Value) -> Self {
        Failure::from_value(&value)
    }
}

fn received_response_from_value(response: &Value) -> Option<ReceivedResponse> {
    let status = response.get("status").and_then(Value::as_u64)?;
    let status = u16::try_from(status).ok()?;

    let status_text = response
        .get("statusText")
        .or_else(|| response.get("status_text"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let body = response
        .get("data")
        .or_else(|| response.get("body"))
        .map(|body| clone_within_depth(body, COPY_DEPTH))
        .unwrap_or(Value::Null);

    Some(ReceivedResponse {
        status,
        status_text,
        body,
    })
}
