use crate::config::types::NormalizerConfig;
use crate::error::{NormalizerError, Result};
use crate::traits::ConfigValidator;
use std::path::Path;

/// Upper bound accepted for `limits.max_depth`
pub const MAX_ALLOWED_DEPTH: usize = 1024;

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = NormalizerConfig;

    /// Validate configuration (uses default context)
    fn validate(&self, config: &NormalizerConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }
}

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validation with the config source named in error messages
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &NormalizerConfig,
        config_path: P,
    ) -> Result<()> {
        let config_path_str = config_path.as_ref().to_string_lossy();

        if let Some(messages) = &config.messages {
            let named = [
                ("timeout", &messages.timeout),
                ("network", &messages.network),
                ("fallback", &messages.fallback),
            ];
            for (name, message) in named {
                if message.as_deref().is_some_and(|m| m.trim().is_empty()) {
                    return Err(NormalizerError::invalid_config(format!(
                        "messages.{} in {} must not be blank",
                        name, config_path_str
                    )));
                }
            }
        }

        for (code, message) in &config.status_messages {
            let status = code.trim().parse::<u16>().map_err(|_| {
                NormalizerError::invalid_config(format!(
                    "Invalid status code '{}' in [status_messages] of {}",
                    code, config_path_str
                ))
            })?;

            if !(100..=599).contains(&status) {
                return Err(NormalizerError::invalid_config(format!(
                    "Status code {} in {} must be between 100 and 599",
                    status, config_path_str
                )));
            }

            if message.trim().is_empty() {
                return Err(NormalizerError::invalid_config(format!(
                    "Message for status {} in {} must not be blank",
                    status, config_path_str
                )));
            }
        }

        if let Some(depth) = config.limits.as_ref().and_then(|l| l.max_depth) {
            if depth == 0 || depth > MAX_ALLOWED_DEPTH {
                return Err(NormalizerError::invalid_config(format!(
                    "limits.max_depth must be between 1 and {}",
                    MAX_ALLOWED_DEPTH
                )));
            }
        }

        if let Some(codes) = &config.timeout_codes {
            if codes.iter().any(|code| code.trim().is_empty()) {
                return Err(NormalizerError::invalid_config(format!(
                    "timeout_codes in {} must not contain blank entries",
                    config_path_str
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidatorImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ConfigValidatorImpl::new().validate(self)
    }
}
