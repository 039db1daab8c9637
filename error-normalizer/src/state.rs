//! Mutable error state for UI-facing consumers
//!
//! `ErrorState` keeps the most recent `ErrorMap` and wraps the pure
//! normalization functions with set/clear/has/get operations.

use crate::analysis::ErrorNormalizer;
use crate::traits::FailureClassifier;
use crate::types::{ErrorMap, Failure};
use serde_json::Value;
use std::sync::Arc;

/// Holder for the current set of errors
#[derive(Debug, Clone)]
pub struct ErrorState {
    errors: ErrorMap,
    normalizer: Arc<ErrorNormalizer>,
}

impl Default for ErrorState {
    fn default() -> Self {
        Self::new(Arc::new(ErrorNormalizer::default()))
    }
}

impl ErrorState {
    /// Create an empty state backed by a shared normalizer
    pub fn new(normalizer: Arc<ErrorNormalizer>) -> Self {
        Self {
            errors: ErrorMap::new(),
            normalizer,
        }
    }

    /// Current errors
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Replace the current errors with the normalized form of an untyped failure
    pub fn set_from_failure(&mut self, error: &Value, fallback: &str) -> &ErrorMap {
        self.errors = self.normalizer.handle(error, fallback);
        &self.errors
    }

    /// Replace the current errors with the normalized form of a typed failure
    pub fn set_from(&mut self, failure: &Failure, fallback: &str) -> &ErrorMap {
        self.errors = self.normalizer.handle_failure(failure, fallback);
        &self.errors
    }

    /// Set a single field message; blank messages are ignored
    pub fn set_field<K, V>(&mut self, field: K, message: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.errors.insert(field, message);
    }

    /// Clear one field, or everything when `field` is None
    pub fn clear(&mut self, field: Option<&str>) {
        match field {
            Some(field) => {
                self.errors.remove(field);
            }
            None => self.errors.clear(),
        }
    }

    /// Whether a field has an error, or whether there is any error when `field` is None
    pub fn has(&self, field: Option<&str>) -> bool {
        match field {
            Some(field) => self.errors.contains(field),
            None => !self.errors.is_empty(),
        }
    }

    /// Message for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    /// Message to show in a notification, if there is any error
    pub fn toast_message(&self) -> Option<&str> {
        self.errors.general().or_else(|| self.errors.first_message())
    }
}
