//! Fixtures shared by the end-to-end tests
//!
//! Each fixture is an error body in the style of a common API framework,
//! paired with the field messages a form should show for it.

use serde_json::{json, Value};

/// An error body and the messages expected from it
#[derive(Debug, Clone)]
pub struct PayloadFixture {
    pub name: String,
    pub status: u16,
    pub body: Value,
    pub expected: Vec<(String, String)>,
}

impl PayloadFixture {
    fn new(name: &str, status: u16, body: Value, expected: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            status,
            body,
            expected: expected
                .iter()
                .map(|(field, message)| (field.to_string(), message.to_string()))
                .collect(),
        }
    }
}

/// Bodies produced by popular server frameworks
pub fn framework_fixtures() -> Vec<PayloadFixture> {
    vec![
        PayloadFixture::new(
            "django-rest-framework",
            400,
            json!({"username": ["A user with that username already exists."], "password": ["This field may not be blank."]}),
            &[
                ("username", "A user with that username already exists."),
                ("password", "This field may not be blank."),
            ],
        ),
        PayloadFixture::new(
            "rails",
            422,
            json!({"errors": {"title": ["can't be blank"], "body": ["is too short (minimum is 10 characters)"]}}),
            &[
                ("title", "can't be blank"),
                ("body", "is too short (minimum is 10 characters)"),
            ],
        ),
        PayloadFixture::new(
            "nested-resource",
            422,
            json!({"validationErrors": {"shipping": {"address": {"zip": "Invalid postal code"}}}}),
            &[("shipping.address.zip", "Invalid postal code")],
        ),
        PayloadFixture::new(
            "fastapi-detail",
            401,
            json!({"detail": "Could not validate credentials"}),
            &[("detail", "Could not validate credentials")],
        ),
        PayloadFixture::new(
            "express-message",
            409,
            json!({"message": "Email is already registered", "statusCode": 409}),
            &[("general", "Email is already registered")],
        ),
        PayloadFixture::new(
            "empty-body",
            500,
            json!({}),
            &[("general", "Internal server error. Please try again later.")],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_names_are_unique() {
        let fixtures = framework_fixtures();
        let mut names: Vec<&str> = fixtures.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), fixtures.len());
    }
}
