use crate::error::Result;
use crate::types::{ErrorMap, Failure, TransportFailure};
use serde_json::Value;

/// Trait for turning failures into normalized error maps
pub trait FailureClassifier: Send + Sync {
    /// Extract field messages from an untyped payload
    fn extract(&self, value: &Value, fallback: &str) -> ErrorMap;

    /// Classify a transport failure (no response, or a response with a status)
    fn classify(&self, failure: &TransportFailure, fallback: &str) -> ErrorMap;

    /// Dispatch a typed failure to `classify` or `extract`
    fn handle_failure(&self, failure: &Failure, fallback: &str) -> ErrorMap {
        match failure {
            Failure::Transport(transport) => self.classify(transport, fallback),
            Failure::Raw(value) => self.extract(value, fallback),
        }
    }

    /// Entry point for untyped errors
    fn handle(&self, error: &Value, fallback: &str) -> ErrorMap {
        match TransportFailure::from_value(error) {
            Some(transport) => self.classify(&transport, fallback),
            None => self.extract(error, fallback),
        }
    }

    /// Single message suitable for a notification
    fn toast_message(&self, error: &Value, fallback: &str) -> String;
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
