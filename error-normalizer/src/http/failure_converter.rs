use crate::error::Result;
use crate::extraction::parse_payload;
use crate::traits::FailureClassifier;
use crate::types::{ErrorMap, Failure, ReceivedResponse, TransportFailure};
use reqwest::Response;
use serde_json::Value;

/// Transport code assigned to reqwest timeouts
pub const TIMEOUT_CODE: &str = "ETIMEDOUT";
/// Transport code assigned to connection failures
pub const CONNECTION_CODE: &str = "ECONNREFUSED";
/// Transport code assigned to any other request failure
pub const NETWORK_CODE: &str = "ERR_NETWORK";

/// Converts reqwest outcomes into classifier input
#[derive(Clone)]
pub struct FailureConverter;

impl FailureConverter {
    /// Create a new failure converter
    pub fn new() -> Self {
        Self
    }

    /// Convert a reqwest error into a failure
    ///
    /// Errors raised for a status (e.g. by `error_for_status`) keep that
    /// status with an empty body; everything else has no response.
    pub fn from_reqwest_error(&self, error: &reqwest::Error) -> Failure {
        if let Some(status) = error.status() {
            let response = ReceivedResponse {
                status: status.as_u16(),
                status_text: status.canonical_reason().map(str::to_string),
                body: Value::Null,
            };
            return Failure::Transport(TransportFailure {
                code: None,
                message: Some(error.to_string()),
                response: Some(response),
            });
        }

        let code = if error.is_timeout() {
            TIMEOUT_CODE
        } else if error.is_connect() {
            CONNECTION_CODE
        } else {
            NETWORK_CODE
        };

        Failure::Transport(TransportFailure {
            code: Some(code.to_string()),
            message: Some(error.to_string()),
            response: None,
        })
    }

    /// Convert a received response into a failure, consuming its body
    ///
    /// JSON bodies are parsed; other text is kept as a string and an empty
    /// body becomes `Null`.
    pub async fn from_response(&self, response: Response) -> Result<Failure> {
        let status = response.status();
        let body = response.text().await?;

        Ok(Failure::Transport(TransportFailure::with_response(ReceivedResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().map(str::to_string),
            body: parse_body(&body),
        })))
    }

    /// Normalize a response, returning None for successful statuses
    pub async fn normalize_response<C: FailureClassifier>(
        &self,
        classifier: &C,
        response: Response,
        fallback: &str,
    ) -> Result<Option<ErrorMap>> {
        if response.status().is_success() {
            return Ok(None);
        }

        let failure = self.from_response(response).await?;
        Ok(Some(classifier.handle_failure(&failure, fallback)))
    }

    /// Normalize the outcome of `RequestBuilder::send`
    pub async fn normalize_outcome<C: FailureClassifier>(
        &self,
        classifier: &C,
        outcome: std::result::Result<Response, reqwest::Error>,
        fallback: &str,
    ) -> Result<Option<ErrorMap>> {
        match outcome {
            Ok(response) => self.normalize_response(classifier, response, fallback).await,
            Err(error) => {
                let failure = self.from_reqwest_error(&error);
                Ok(Some(classifier.handle_failure(&failure, fallback)))
            }
        }
    }
}

impl Default for FailureConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Bodies that look like JSON but do not parse carry no usable message
fn parse_body(body: &str) -> Value {
    parse_payload(body).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "discarding unparseable JSON body");
        Value::Null
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("  \n"), Value::Null);
        assert_eq!(parse_body(r#"{"email": "Taken"}"#), json!({"email": "Taken"}));
        assert_eq!(parse_body("Bad Gateway"), json!("Bad Gateway"));
    }

    #[test]
    fn test_parse_body_drops_unparseable_json() {
        let deep = format!("{}1{}", "[".repeat(300), "]".repeat(300));
        assert_eq!(parse_body(&deep), Value::Null);
        assert_eq!(parse_body("{\"truncated\": "), Value::Null);
    }
}
