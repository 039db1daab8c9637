use crate::cli::{InputArgs, OutputFormat};
use crate::error::{CliError, Result, ResultExt};
use error_normalizer::{
    parse_payload, ErrorMap, ErrorNormalizer, FailureClassifier, JsonRenderer, NormalizerConfig,
    OutputRenderer, TableRenderer,
};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Which normalization entry point a command uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Extract,
    Handle,
}

pub fn execute(config_path: &str, mode: Mode, input: InputArgs, format: OutputFormat) -> Result<()> {
    let normalizer = load_normalizer(config_path)?;
    let payload = read_payload(input.input.as_deref())?;

    let errors = match mode {
        Mode::Extract => normalizer.extract(&payload, &input.fallback),
        Mode::Handle => normalizer.handle(&payload, &input.fallback),
    };

    println!("{}", render(&errors, format));
    Ok(())
}

pub fn execute_toast(config_path: &str, input: InputArgs) -> Result<()> {
    let normalizer = load_normalizer(config_path)?;
    let payload = read_payload(input.input.as_deref())?;

    println!("{}", normalizer.toast_message(&payload, &input.fallback));
    Ok(())
}

/// Build a normalizer from the config file, or the defaults when it is absent
pub fn load_normalizer(config_path: &str) -> Result<ErrorNormalizer> {
    let config = NormalizerConfig::load_or_default(config_path)
        .with_context(|| format!("Loading configuration from {config_path}"))?;
    tracing::debug!(config = config_path, max_depth = config.max_depth(), "configuration loaded");
    Ok(ErrorNormalizer::new(&config))
}

pub fn render(errors: &ErrorMap, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => TableRenderer::new().render(errors),
        OutputFormat::Json => JsonRenderer::new().render(errors),
    }
}

fn read_payload(input: Option<&str>) -> Result<Value> {
    let text = match input {
        Some(path) => {
            if !Path::new(path).exists() {
                return Err(CliError::InputNotFound(path.into()));
            }
            std::fs::read_to_string(path).with_context(|| format!("Reading {path}"))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .with_context(|| "Reading payload from stdin")?;
            buffer
        }
    };

    // non-JSON text is a plain string payload
    parse_payload(&text).with_context(|| "Input looks like JSON but could not be parsed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn payload_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_plain_text_input_is_a_string_payload() {
        let file = payload_file("Disk full\n");
        assert_eq!(read_payload(file.path().to_str()).unwrap(), json!("Disk full"));
    }

    #[test]
    fn test_deeply_nested_input_is_rejected() {
        let deep = format!("{}\"leaf\"{}", "{\"a\":".repeat(200), "}".repeat(200));
        let file = payload_file(&deep);

        let err = read_payload(file.path().to_str()).unwrap_err();
        assert!(matches!(err, CliError::WithContext(_, _)));
        assert!(err.user_message().starts_with("Input looks like JSON"));
    }

    #[test]
    fn test_read_payload_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"response": {{"status": 404, "data": {{}}}}}}"#).unwrap();

        let payload = read_payload(file.path().to_str()).unwrap();
        assert_eq!(payload["response"]["status"], 404);
    }

    #[test]
    fn test_missing_input_file() {
        let err = read_payload(Some("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CliError::InputNotFound(_)));
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let normalizer = load_normalizer("/definitely/not/errnorm.toml").unwrap();
        let errors = normalizer.handle(&json!({"code": "ECONNABORTED"}), "");
        assert_eq!(errors.general(), Some(error_normalizer::TIMEOUT_MESSAGE));
    }

    #[test]
    fn test_json_render_keeps_order() {
        let errors: ErrorMap = vec![("name", "Required"), ("email", "Taken")]
            .into_iter()
            .collect();
        let rendered = render(&errors, OutputFormat::Json);
        assert!(rendered.find("name").unwrap() < rendered.find("email").unwrap());
    }
}
