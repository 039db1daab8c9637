use thiserror::Error;
use std::path::PathBuf;

/// Result type alias for error-normalizer operations
pub type Result<T> = std::result::Result<T, NormalizerError>;

/// Errors raised by the ambient layers (configuration, I/O, HTTP adapters).
///
/// Normalization itself never fails: `extract`, `classify` and `handle`
/// always return an `ErrorMap`.
#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl NormalizerError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = NormalizerError::invalid_config("max_depth must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: max_depth must be positive"
        );

        let error = NormalizerError::ConfigNotFound {
            path: PathBuf::from("errnorm.toml"),
        };
        assert!(error.to_string().contains("errnorm.toml"));
    }

    #[test]
    fn test_from_toml_error() {
        let parse_error = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let error: NormalizerError = parse_error.into();
        assert!(matches!(error, NormalizerError::ConfigParse(_)));
    }
}
