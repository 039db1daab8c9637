//! Classifier: network/timeout/status handling on top of the extractor

use crate::config::NormalizerConfig;
use crate::extraction::Extractor;
use crate::messages::MessageCatalog;
use crate::traits::FailureClassifier;
use crate::types::{ErrorMap, Failure, TransportFailure};
use serde_json::Value;

/// Default implementation of the failure classifier
///
/// Holds only immutable configuration, so one instance can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct ErrorNormalizer {
    extractor: Extractor,
    catalog: MessageCatalog,
}

impl ErrorNormalizer {
    /// Create a normalizer from configuration
    pub fn new(config: &NormalizerConfig) -> Self {
        Self::with_catalog(config.message_catalog(), config.max_depth())
    }

    /// Create a normalizer from already resolved messages
    pub fn with_catalog(catalog: MessageCatalog, max_depth: usize) -> Self {
        let extractor = Extractor::new(max_depth, catalog.fallback.clone());
        Self { extractor, catalog }
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Toast message for an already typed failure
    pub fn toast_message_for(&self, failure: &Failure, fallback: &str) -> String {
        let map = self.handle_failure(failure, fallback);
        self.pick_toast(&map, fallback)
    }

    fn pick_toast(&self, map: &ErrorMap, fallback: &str) -> String {
        map.general()
            .or_else(|| map.first_message())
            .unwrap_or_else(|| self.extractor.effective_fallback(fallback))
            .to_string()
    }

    fn handle_transport(&self, failure: &TransportFailure, fallback: &str) -> ErrorMap {
        tracing::debug!(
            status = failure.status(),
            code = failure.code.as_deref(),
            message = failure.message.as_deref(),
            "remote call failed"
        );
        let map = self.classify(failure, fallback);
        log_fields(&map);
        map
    }

    fn handle_raw(&self, value: &Value, fallback: &str) -> ErrorMap {
        tracing::debug!(kind = value_kind(value), "error payload received");
        let map = self.extract(value, fallback);
        log_fields(&map);
        map
    }

    fn no_response_message(&self, failure: &TransportFailure) -> &str {
        let timed_out = failure
            .code
            .as_deref()
            .is_some_and(|code| self.catalog.is_timeout_code(code));

        if timed_out {
            &self.catalog.timeout
        } else {
            &self.catalog.network
        }
    }
}

impl Default for ErrorNormalizer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}

impl FailureClassifier for ErrorNormalizer {
    fn extract(&self, value: &Value, fallback: &str) -> ErrorMap {
        self.extractor.extract(value, fallback)
    }

    fn classify(&self, failure: &TransportFailure, fallback: &str) -> ErrorMap {
        let Some(response) = &failure.response else {
            return ErrorMap::general_only(self.no_response_message(failure));
        };

        let status_message = self
            .catalog
            .status_message(response.status, response.status_text.as_deref());
        let extracted = self.extractor.extract(&response.body, fallback);

        // structured body data wins over the generic status message
        if extracted.is_only_general(self.extractor.effective_fallback(fallback)) {
            ErrorMap::general_only(status_message)
        } else {
            extracted
        }
    }

    fn handle_failure(&self, failure: &Failure, fallback: &str) -> ErrorMap {
        match failure {
            Failure::Transport(transport) => self.handle_transport(transport, fallback),
            Failure::Raw(value) => self.handle_raw(value, fallback),
        }
    }

    fn handle(&self, error: &Value, fallback: &str) -> ErrorMap {
        match TransportFailure::from_value(error) {
            Some(transport) => self.handle_transport(&transport, fallback),
            None => self.handle_raw(error, fallback),
        }
    }

    fn toast_message(&self, error: &Value, fallback: &str) -> String {
        let map = self.handle(error, fallback);
        self.pick_toast(&map, fallback)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn log_fields(map: &ErrorMap) {
    tracing::debug!(fields = ?map.fields().collect::<Vec<_>>(), "normalized failure");
}
