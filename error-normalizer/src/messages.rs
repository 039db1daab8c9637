//! Default message strings and the canned HTTP status message table

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Message used when a request timed out or was aborted before a response arrived
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";

/// Message used when no response was received for any other reason
pub const NETWORK_MESSAGE: &str = "Network error. Please check your connection.";

/// Fallback used when the caller does not supply a usable one
pub const DEFAULT_FALLBACK_MESSAGE: &str = "An unexpected error occurred.";

/// Reserved ErrorMap key for messages that cannot be attributed to a field
pub const GENERAL_KEY: &str = "general";

/// Transport codes that denote a timeout or an aborted request
pub const DEFAULT_TIMEOUT_CODES: &[&str] = &[
    "ECONNABORTED",
    "ETIMEDOUT",
    "ESOCKETTIMEDOUT",
    "ERR_CANCELED",
    "AbortError",
    "TimeoutError",
];

static STATUS_MESSAGES: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (400, "Bad request. Please check your input."),
        (401, "You are not authorized. Please sign in again."),
        (403, "You do not have permission to perform this action."),
        (404, "Resource not found."),
        (405, "This action is not allowed."),
        (408, "The request took too long. Please try again."),
        (409, "This request conflicts with the current state of the resource."),
        (413, "The request is too large."),
        (422, "Validation failed. Please check your input."),
        (429, "Too many requests. Please slow down and try again."),
        (500, "Internal server error. Please try again later."),
        (502, "Bad gateway. Please try again later."),
        (503, "Service unavailable. Please try again later."),
        (504, "Gateway timeout. Please try again later."),
    ])
});

/// Look up the canned message for an HTTP status code
pub fn status_message(status: u16) -> Option<&'static str> {
    STATUS_MESSAGES.get(&status).copied()
}

/// Build the message for a status code missing from the table
///
/// A missing status text falls back to the canonical reason phrase.
pub fn synthesize_status_message(status: u16, status_text: Option<&str>) -> String {
    let text = status_text
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .or_else(|| {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|code| code.canonical_reason())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "Unknown Error".to_string());

    format!("Error {}: {}", status, text)
}

/// Runtime message data resolved from configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MessageCatalog {
    pub timeout: String,
    pub network: String,
    pub fallback: String,
    pub timeout_codes: Vec<String>,
    status_overrides: HashMap<u16, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            timeout: TIMEOUT_MESSAGE.to_string(),
            network: NETWORK_MESSAGE.to_string(),
            fallback: DEFAULT_FALLBACK_MESSAGE.to_string(),
            timeout_codes: DEFAULT_TIMEOUT_CODES.iter().map(|c| c.to_string()).collect(),
            status_overrides: HashMap::new(),
        }
    }
}

impl MessageCatalog {
    /// Replace the canned message for one status code
    pub fn override_status<S: Into<String>>(&mut self, status: u16, message: S) {
        self.status_overrides.insert(status, message.into());
    }

    /// Message for a received status: override, then table, then synthesized
    pub fn status_message(&self, status: u16, status_text: Option<&str>) -> String {
        self.status_overrides
            .get(&status)
            .cloned()
            .or_else(|| status_message(status).map(str::to_string))
            .unwrap_or_else(|| synthesize_status_message(status, status_text))
    }

    /// Whether a transport code denotes a timeout or abort
    pub fn is_timeout_code(&self, code: &str) -> bool {
        let code = code.trim();
        self.timeout_codes
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_overrides_take_priority() {
        let mut catalog = MessageCatalog::default();
        catalog.override_status(404, "We looked everywhere.");

        assert_eq!(catalog.status_message(404, None), "We looked everywhere.");
        assert_eq!(catalog.status_message(500, None), "Internal server error. Please try again later.");
        assert_eq!(catalog.status_message(418, Some("Teapot")), "Error 418: Teapot");
    }

    #[test]
    fn test_timeout_codes_are_case_insensitive() {
        let catalog = MessageCatalog::default();
        assert!(catalog.is_timeout_code("ECONNABORTED"));
        assert!(catalog.is_timeout_code("econnaborted"));
        assert!(catalog.is_timeout_code("AbortError"));
        assert!(!catalog.is_timeout_code("ECONNREFUSED"));
    }

    #[test]
    fn test_status_table_lookup() {
        assert_eq!(status_message(404), Some("Resource not found."));
        assert_eq!(status_message(418), None);
    }

    #[test]
    fn test_synthesized_message_prefers_status_text() {
        assert_eq!(
            synthesize_status_message(418, Some("Short and stout")),
            "Error 418: Short and stout"
        );
        assert_eq!(
            synthesize_status_message(418, Some("   ")),
            "Error 418: I'm a teapot"
        );
        assert_eq!(synthesize_status_message(599, None), "Error 599: Unknown Error");
    }
}
