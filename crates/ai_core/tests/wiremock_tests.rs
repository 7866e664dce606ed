//! Integration tests for the chat-completions client using WireMock
//!
//! These tests mock the OpenAI-compatible HTTP API to verify client
//! behavior without a live endpoint.
#![allow(clippy::expect_used)]

use ai_core::{ChatCompletionsClient, CompletionRequest, InferenceConfig, InferenceError};
use secrecy::SecretString;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for_mock(base_url: &str) -> InferenceConfig {
    InferenceConfig {
        api_base: format!("{base_url}/v1"),
        api_key: Some(SecretString::from("sk-test")),
        model: "test-model".to_string(),
        timeout_ms: 5000,
        max_tokens: 100,
        temperature: 0.0,
    }
}

/// Sample chat-completions success response
fn chat_success_response() -> serde_json::Value {
    serde_json::json!({
        "model": "test-model",
        "choices": [
            {
                "message": {
                    "role": "assistant",
                    "content": "{\"category\": \"Produtivo\", \"reply\": \"On it.\"}"
                },
                "finish_reason": "stop"
            }
        ],
        "usage": {
            "prompt_tokens": 40,
            "completion_tokens": 12,
            "total_tokens": 52
        }
    })
}

#[tokio::test]
async fn complete_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ChatCompletionsClient::new(config_for_mock(&mock_server.uri()))
        .expect("failed to create client");

    let response = client
        .complete(CompletionRequest::simple("Classify this email"))
        .await
        .expect("completion should succeed");

    assert_eq!(response.model, "test-model");
    assert!(response.content.contains("Produtivo"));
    let usage = response.usage.expect("usage should be reported");
    assert_eq!(usage.prompt_tokens, 40);
    assert_eq!(usage.completion_tokens, 12);
    assert_eq!(usage.total_tokens, 52);
}

#[tokio::test]
async fn server_error_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = ChatCompletionsClient::new(config_for_mock(&mock_server.uri()))
        .expect("failed to create client");

    let result = client.complete(CompletionRequest::simple("hello")).await;

    assert!(matches!(result, Err(InferenceError::ServerError(_))));
}

#[tokio::test]
async fn rate_limit_status_is_a_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&mock_server)
        .await;

    let client = ChatCompletionsClient::new(config_for_mock(&mock_server.uri()))
        .expect("failed to create client");

    let result = client.complete(CompletionRequest::simple("hello")).await;

    assert!(matches!(result, Err(InferenceError::ServerError(_))));
}

#[tokio::test]
async fn malformed_body_is_an_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = ChatCompletionsClient::new(config_for_mock(&mock_server.uri()))
        .expect("failed to create client");

    let result = client.complete(CompletionRequest::simple("hello")).await;

    assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
}

#[tokio::test]
async fn empty_choices_is_an_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "model": "test-model",
            "choices": []
        })))
        .mount(&mock_server)
        .await;

    let client = ChatCompletionsClient::new(config_for_mock(&mock_server.uri()))
        .expect("failed to create client");

    let result = client.complete(CompletionRequest::simple("hello")).await;

    assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
}

#[tokio::test]
async fn missing_credential_never_reaches_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = config_for_mock(&mock_server.uri());
    config.api_key = None;
    let client = ChatCompletionsClient::new(config).expect("failed to create client");

    let result = client.complete(CompletionRequest::simple("hello")).await;

    assert!(matches!(result, Err(InferenceError::MissingCredential)));
}
