use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Normalizer error: {0}")]
    Normalizer(#[from] error_normalizer::NormalizerError),

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Anyhow error: {0}")]
    AnyhowError(#[from] anyhow::Error),

    #[error("Dialoguer error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Normalizer(err) => err.to_string(),
            Self::InputNotFound(path) => format!("Input file not found at: {}", path.display()),
            Self::InvalidMethod(method) => format!("'{method}' is not a valid HTTP method"),
            Self::JsonParseError(err) => format!("Failed to parse JSON: {err}"),
            Self::AnyhowError(err) => format!("Error: {err}"),
            Self::DialoguerError(err) => format!("UI interaction error: {err}"),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<CliError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let cli_err: CliError = err.into();
            cli_err.with_context(context())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_prefixed() {
        let err = CliError::InvalidMethod("FETCH".to_string()).with_context("Building request");
        assert_eq!(
            err.user_message(),
            "Building request: 'FETCH' is not a valid HTTP method"
        );
    }

    #[test]
    fn test_result_ext_wraps_errors() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = result.with_context(|| "Reading payload").unwrap_err();
        assert!(err.user_message().starts_with("Reading payload: I/O operation failed"));
    }
}
