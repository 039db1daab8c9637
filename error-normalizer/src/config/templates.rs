use crate::error::{NormalizerError, Result};
use std::path::Path;

/// Generate the default errnorm.toml template with every setting commented
pub fn generate_default_config_template() -> String {
    r#"# errnorm configuration
# Every setting is optional; omitted values use the built-in defaults.

# Transport codes treated as a timeout or aborted request (case-insensitive).
# Setting this replaces the default list.
# timeout_codes = ["ECONNABORTED", "ETIMEDOUT", "ESOCKETTIMEDOUT", "ERR_CANCELED", "AbortError", "TimeoutError"]

[messages]
# Shown when the request timed out before a response arrived
timeout = "Request timed out. Please try again."
# Shown when no response was received at all
network = "Network error. Please check your connection."
# Used when callers do not provide a fallback message
fallback = "An unexpected error occurred."

# Override canned messages for specific HTTP status codes
[status_messages]
# "404" = "Resource not found."
# "429" = "Too many requests. Please slow down and try again."

[limits]
# Maximum nesting depth explored when collecting field messages
max_depth = 32
"#.to_string()
}

/// Write the default template unless the file already exists
///
/// Returns true when a file was written. `overwrite` replaces an existing file.
pub fn ensure_config_file_exists<P: AsRef<Path>>(config_path: P, overwrite: bool) -> Result<bool> {
    let path = config_path.as_ref();

    if path.exists() && !overwrite {
        return Ok(false);
    }

    std::fs::write(path, generate_default_config_template())
        .map_err(NormalizerError::Io)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NormalizerConfig;

    #[test]
    fn test_template_parses_and_validates() {
        let config: NormalizerConfig = toml::from_str(&generate_default_config_template()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_depth(), 32);
        assert!(config.status_messages.is_empty());
    }
}
