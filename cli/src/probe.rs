use crate::cli::OutputFormat;
use crate::error::{CliError, Result, ResultExt};
use crate::normalize::{load_normalizer, render};
use crate::ui;
use error_normalizer::FailureConverter;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Method;
use std::time::Duration;
use tokio::runtime::Runtime;

pub struct ProbeRequest {
    pub url: String,
    pub method: String,
    pub body: Option<String>,
    pub timeout_seconds: u64,
    pub fallback: String,
    pub format: OutputFormat,
}

pub fn execute(config_path: &str, request: ProbeRequest) -> Result<()> {
    let normalizer = load_normalizer(config_path)?;
    let method = parse_method(&request.method)?;
    let body = request
        .body
        .as_deref()
        .map(|body| serde_json::from_str::<serde_json::Value>(body))
        .transpose()
        .with_context(|| "Parsing request body")?;

    let runtime = Runtime::new().with_context(|| "Starting async runtime")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("{} {}", method, request.url));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = runtime.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(request.timeout_seconds))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        let mut builder = client.request(method.clone(), &request.url);
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await;
        FailureConverter::new()
            .normalize_outcome(&normalizer, response, &request.fallback)
            .await
            .map_err(CliError::from)
    });

    spinner.finish_and_clear();

    match outcome? {
        None => ui::success_message(&format!("{} {} succeeded", method, request.url)),
        Some(errors) => {
            ui::section_header("Normalized errors");
            println!("{}", render(&errors, request.format));
        }
    }

    Ok(())
}

fn parse_method(method: &str) -> Result<Method> {
    Method::from_bytes(method.trim().to_uppercase().as_bytes())
        .map_err(|_| CliError::InvalidMethod(method.to_string()))
}
