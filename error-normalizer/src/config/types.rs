use crate::config::validator::MAX_ALLOWED_DEPTH;
use crate::extraction::DEFAULT_MAX_DEPTH;
use crate::messages::MessageCatalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main configuration structure, loaded from errnorm.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NormalizerConfig {
    /// Replacement wording for the built-in messages
    pub messages: Option<MessagesConfig>,
    /// Per-status overrides of the canned status messages, keyed by status code
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub status_messages: BTreeMap<String, String>,
    /// Walk limits
    pub limits: Option<LimitsConfig>,
    /// Transport codes treated as timeouts (replaces the default list)
    pub timeout_codes: Option<Vec<String>>,
}

/// Message wording overrides
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MessagesConfig {
    /// Shown when the request timed out or was aborted
    pub timeout: Option<String>,
    /// Shown when no response was received
    pub network: Option<String>,
    /// Default fallback when callers pass a blank one
    pub fallback: Option<String>,
}

/// Limits applied while walking payloads
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Maximum recursion depth of the field walk
    pub max_depth: Option<usize>,
}

impl NormalizerConfig {
    /// Effective maximum walk depth, clamped to 1..=MAX_ALLOWED_DEPTH
    ///
    /// Configs built by hand skip validation, so the clamp applies here too.
    pub fn max_depth(&self) -> usize {
        self.limits
            .as_ref()
            .and_then(|limits| limits.max_depth)
            .unwrap_or(DEFAULT_MAX_DEPTH)
            .clamp(1, MAX_ALLOWED_DEPTH)
    }

    /// Resolve the configuration into runtime message data
    ///
    /// Blank messages and status keys that are not numbers are skipped; the
    /// validator reports them.
    pub fn message_catalog(&self) -> MessageCatalog {
        let mut catalog = MessageCatalog::default();

        if let Some(messages) = &self.messages {
            if let Some(timeout) = non_blank(&messages.timeout) {
                catalog.timeout = timeout.to_string();
            }
            if let Some(network) = non_blank(&messages.network) {
                catalog.network = network.to_string();
            }
            if let Some(fallback) = non_blank(&messages.fallback) {
                catalog.fallback = fallback.to_string();
            }
        }

        for (code, message) in &self.status_messages {
            let message = message.trim();
            match code.trim().parse::<u16>() {
                Ok(status) if !message.is_empty() => catalog.override_status(status, message),
                _ => {}
            }
        }

        if let Some(codes) = &self.timeout_codes {
            catalog.timeout_codes = codes.iter().map(|c| c.trim().to_string()).collect();
        }

        catalog
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|text| !text.is_empty())
}
