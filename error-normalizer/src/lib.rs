//! Error Normalizer - uniform messages from arbitrary remote-call failures
//!
//! This crate turns an untyped error payload (an HTTP client failure, a
//! network error or a raw JSON object) into an `ErrorMap` of field path to
//! message, plus a single best-effort message for notifications.

// Core modules
pub mod config;
pub mod error;
pub mod messages;
pub mod traits;
pub mod types;

// Main functionality modules
pub mod analysis;
pub mod extraction;
pub mod http;
pub mod renderers;
pub mod state;

// Re-export main types for convenience
pub use analysis::ErrorNormalizer;
pub use config::{NormalizerConfig, NormalizerConfigBuilder};
pub use error::{NormalizerError, Result};
pub use extraction::{parse_payload, Extractor};
pub use http::FailureConverter;
pub use messages::{
    MessageCatalog, DEFAULT_FALLBACK_MESSAGE, GENERAL_KEY, NETWORK_MESSAGE, TIMEOUT_MESSAGE,
};
pub use renderers::{JsonRenderer, OutputRenderer, TableRenderer};
pub use state::ErrorState;
pub use traits::FailureClassifier;
pub use types::{ErrorMap, Failure, ReceivedResponse, TransportFailure};

use once_cell::sync::Lazy;
use serde_json::Value;

static DEFAULT_NORMALIZER: Lazy<ErrorNormalizer> = Lazy::new(ErrorNormalizer::default);

/// Shared normalizer with the built-in configuration
pub fn default_normalizer() -> &'static ErrorNormalizer {
    &DEFAULT_NORMALIZER
}

/// Extract field messages from an untyped payload
pub fn extract(value: &Value, fallback: &str) -> ErrorMap {
    DEFAULT_NORMALIZER.extract(value, fallback)
}

/// Classify a transport failure
pub fn classify(failure: &TransportFailure, fallback: &str) -> ErrorMap {
    DEFAULT_NORMALIZER.classify(failure, fallback)
}

/// Normalize any error value, logging it for diagnostics
pub fn handle(error: &Value, fallback: &str) -> ErrorMap {
    DEFAULT_NORMALIZER.handle(error, fallback)
}

/// Normalize an already typed failure
pub fn handle_failure(failure: &Failure, fallback: &str) -> ErrorMap {
    DEFAULT_NORMALIZER.handle_failure(failure, fallback)
}

/// Single notification message for any error value
pub fn toast_message(error: &Value, fallback: &str) -> String {
    DEFAULT_NORMALIZER.toast_message(error, fallback)
}
