//! JSON renderer for structured output

use crate::types::ErrorMap;
use super::OutputRenderer;

/// JSON renderer that produces the error map as a JSON object
pub struct JsonRenderer {
    /// Whether to pretty-print the JSON output
    pub pretty: bool,
}

impl JsonRenderer {
    /// Create a new JSON renderer with pretty printing
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON renderer with compact output
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, errors: &ErrorMap) -> String {
        if self.pretty {
            serde_json::to_string_pretty(errors).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(errors).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_json_keeps_field_order() {
        let errors: ErrorMap = vec![("user.email", "Invalid"), ("general", "Fix the form")]
            .into_iter()
            .collect();

        assert_eq!(
            JsonRenderer::compact().render(&errors),
            r#"{"user.email":"Invalid","general":"Fix the form"}"#
        );
    }

    #[test]
    fn test_pretty_json() {
        let output = JsonRenderer::new().render(&ErrorMap::general_only("Boom"));
        assert!(output.starts_with('{'));
        assert!(output.contains("\"general\": \"Boom\""));
    }
}
