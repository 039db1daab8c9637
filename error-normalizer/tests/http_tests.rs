//! reqwest adapter tests against a mock HTTP server

mod common;

use common::*;
use error_normalizer::{
    ErrorNormalizer, Failure, FailureConverter, NETWORK_MESSAGE, TIMEOUT_MESSAGE,
};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn mount(server: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_message_envelope_wins_over_error_list() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/users",
        ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid.",
            "errors": {"email": ["The email has already been taken."]}
        })),
    )
    .await;

    let response = reqwest::get(format!("{}/users", server.uri())).await.unwrap();
    let map = FailureConverter::new()
        .normalize_response(&ErrorNormalizer::default(), response, FALLBACK)
        .await
        .unwrap()
        .unwrap();

    // the message envelope is unwrapped first
    assert_eq!(map, error_map(&[("general", "The given data was invalid.")]));
}

#[tokio::test]
async fn test_empty_error_body_uses_status_message() {
    let server = MockServer::start().await;
    mount(&server, "/missing", ResponseTemplate::new(404)).await;

    let response = reqwest::get(format!("{}/missing", server.uri())).await.unwrap();
    let failure = FailureConverter::new().from_response(response).await.unwrap();

    let Failure::Transport(transport) = &failure else {
        panic!("expected transport failure");
    };
    assert_eq!(transport.status(), Some(404));

    assert_eq!(
        error_normalizer::handle_failure(&failure, FALLBACK),
        error_map(&[("general", "Resource not found.")])
    );
}

#[tokio::test]
async fn test_plain_text_body_is_kept() {
    let server = MockServer::start().await;
    mount(&server, "/gateway", ResponseTemplate::new(502).set_body_string("upstream reset")).await;

    let response = reqwest::get(format!("{}/gateway", server.uri())).await.unwrap();
    let map = FailureConverter::new()
        .normalize_response(&ErrorNormalizer::default(), response, FALLBACK)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(map, error_map(&[("general", "upstream reset")]));
}

#[tokio::test]
async fn test_overly_nested_json_body_uses_status_message() {
    let server = MockServer::start().await;
    let body = format!("{}\"leaf\"{}", "{\"a\":".repeat(300), "}".repeat(300));
    mount(&server, "/deep", ResponseTemplate::new(500).set_body_string(body)).await;

    let response = reqwest::get(format!("{}/deep", server.uri())).await.unwrap();
    let map = FailureConverter::new()
        .normalize_response(&ErrorNormalizer::default(), response, FALLBACK)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        map,
        error_map(&[("general", "Internal server error. Please try again later.")])
    );
}

#[tokio::test]
async fn test_success_is_not_normalized() {
    let server = MockServer::start().await;
    mount(&server, "/ok", ResponseTemplate::new(200).set_body_json(json!({"ok": true}))).await;

    let response = reqwest::get(format!("{}/ok", server.uri())).await.unwrap();
    let outcome = FailureConverter::new()
        .normalize_response(&ErrorNormalizer::default(), response, FALLBACK)
        .await
        .unwrap();

    assert!(outcome.is_none());
}

#[tokio::test]
async fn test_client_timeout_maps_to_timeout_message() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/slow",
        ResponseTemplate::new(200).set_delay(Duration::from_millis(500)),
    )
    .await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let outcome = client.get(format!("{}/slow", server.uri())).send().await;

    let map = FailureConverter::new()
        .normalize_outcome(&ErrorNormalizer::default(), outcome, FALLBACK)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(map.general(), Some(TIMEOUT_MESSAGE));
}

#[tokio::test]
async fn test_connection_refused_maps_to_network_message() {
    let outcome = reqwest::Client::new()
        .get("http://127.0.0.1:9/unreachable")
        .send()
        .await;
    assert!(outcome.is_err());

    let map = FailureConverter::new()
        .normalize_outcome(&ErrorNormalizer::default(), outcome, FALLBACK)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(map.general(), Some(NETWORK_MESSAGE));
}

#[tokio::test]
async fn test_error_for_status_keeps_status() {
    let server = MockServer::start().await;
    mount(&server, "/denied", ResponseTemplate::new(403)).await;

    let error = reqwest::get(format!("{}/denied", server.uri()))
        .await
        .unwrap()
        .error_for_status()
        .unwrap_err();

    let failure = FailureConverter::new().from_reqwest_error(&error);
    assert_eq!(
        error_normalizer::handle_failure(&failure, FALLBACK).general(),
        Some("You do not have permission to perform this action.")
    );
}
