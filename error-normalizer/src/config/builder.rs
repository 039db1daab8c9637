use crate::config::types::{LimitsConfig, MessagesConfig, NormalizerConfig};
use crate::error::Result;
use std::collections::BTreeMap;

/// Builder for NormalizerConfig
pub struct NormalizerConfigBuilder {
    messages: Option<MessagesConfig>,
    status_messages: BTreeMap<String, String>,
    limits: Option<LimitsConfig>,
    timeout_codes: Option<Vec<String>>,
}

impl NormalizerConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self {
            messages: None,
            status_messages: BTreeMap::new(),
            limits: None,
            timeout_codes: None,
        }
    }

    /// Set the timeout message
    #[must_use]
    pub fn timeout_message<S: Into<String>>(mut self, message: S) -> Self {
        let mut messages = self.messages.unwrap_or_default();
        messages.timeout = Some(message.into());
        self.messages = Some(messages);
        self
    }

    /// Set the network failure message
    #[must_use]
    pub fn network_message<S: Into<String>>(mut self, message: S) -> Self {
        let mut messages = self.messages.unwrap_or_default();
        messages.network = Some(message.into());
        self.messages = Some(messages);
        self
    }

    /// Set the default fallback message
    #[must_use]
    pub fn fallback_message<S: Into<String>>(mut self, message: S) -> Self {
        let mut messages = self.messages.unwrap_or_default();
        messages.fallback = Some(message.into());
        self.messages = Some(messages);
        self
    }

    /// Override the canned message for a status code
    #[must_use]
    pub fn status_message<S: Into<String>>(mut self, status: u16, message: S) -> Self {
        self.status_messages.insert(status.to_string(), message.into());
        self
    }

    /// Set the maximum walk depth
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        let mut limits = self.limits.unwrap_or_default();
        limits.max_depth = Some(depth);
        self.limits = Some(limits);
        self
    }

    /// Replace the list of timeout codes
    #[must_use]
    pub fn timeout_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.timeout_codes = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid (e.g., blank messages or a zero depth)
    pub fn build(self) -> Result<NormalizerConfig> {
        let config = NormalizerConfig {
            messages: self.messages,
            status_messages: self.status_messages,
            limits: self.limits,
            timeout_codes: self.timeout_codes,
        };

        use crate::config::validator::ConfigValidatorImpl;
        use crate::traits::ConfigValidator;
        let validator = ConfigValidatorImpl;
        validator.validate(&config)?;

        Ok(config)
    }
}

impl Default for NormalizerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
