//! Adapter-level tests for the remote classifier using WireMock
//!
//! Verifies the "no result rather than error" contract across the failure
//! modes the port promises to absorb.
#![allow(clippy::expect_used)]

use ai_core::{ChatCompletionsClient, InferenceConfig};
use application::RemoteClassifierPort;
use domain::{Category, ClassificationSource};
use infrastructure::OpenAiRemoteClassifier;
use secrecy::SecretString;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn classifier_for(mock_server: &MockServer) -> OpenAiRemoteClassifier {
    let config = InferenceConfig {
        api_base: format!("{}/v1", mock_server.uri()),
        api_key: Some(SecretString::from("sk-test")),
        model: "test-model".to_string(),
        timeout_ms: 5000,
        max_tokens: 100,
        temperature: 0.0,
    };
    OpenAiRemoteClassifier::new(ChatCompletionsClient::new(config).expect("client"))
}

/// A chat-completions response whose assistant message is `content`
fn completion_with(content: &str) -> serde_json::Value {
    serde_json::json!({
        "model": "test-model",
        "choices": [
            {"message": {"role": "assistant", "content": content}}
        ]
    })
}

async fn mount_completion(mock_server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with(content)))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn valid_verdict_is_returned() {
    let mock_server = MockServer::start().await;
    mount_completion(
        &mock_server,
        r#"{"category": "Produtivo", "reply": "We are on it."}"#,
    )
    .await;

    let result = classifier_for(&mock_server)
        .try_classify("my invoice is wrong")
        .await
        .expect("should classify");

    assert_eq!(result.category, Category::Productive);
    assert_eq!(result.reply, "We are on it.");
    assert_eq!(result.source, ClassificationSource::Remote);
}

#[tokio::test]
async fn verdict_wrapped_in_prose_is_recovered() {
    let mock_server = MockServer::start().await;
    mount_completion(
        &mock_server,
        "Here you go:\n{\"category\": \"Improdutivo\",\n \"reply\": \"Thanks!\"}\nHope that helps.",
    )
    .await;

    let result = classifier_for(&mock_server)
        .try_classify("happy new year")
        .await
        .expect("should classify");

    assert_eq!(result.category, Category::Unproductive);
    assert_eq!(result.reply, "Thanks!");
}

#[tokio::test]
async fn english_category_labels_are_accepted() {
    let mock_server = MockServer::start().await;
    mount_completion(
        &mock_server,
        r#"{"category": "productive", "reply": "ok"}"#,
    )
    .await;

    let result = classifier_for(&mock_server)
        .try_classify("server down")
        .await
        .expect("should classify");

    assert_eq!(result.category, Category::Productive);
}

#[tokio::test]
async fn category_outside_the_taxonomy_voids_the_attempt() {
    let mock_server = MockServer::start().await;
    mount_completion(&mock_server, r#"{"category": "Spam", "reply": "x"}"#).await;

    let result = classifier_for(&mock_server).try_classify("hello").await;

    assert!(result.is_none());
}

#[tokio::test]
async fn missing_category_defaults_to_productive() {
    let mock_server = MockServer::start().await;
    mount_completion(&mock_server, r#"{"reply": "Sure thing."}"#).await;

    let result = classifier_for(&mock_server)
        .try_classify("hello")
        .await
        .expect("should classify");

    assert_eq!(result.category, Category::Productive);
    assert_eq!(result.reply, "Sure thing.");
}

#[tokio::test]
async fn response_without_json_becomes_the_reply() {
    let mock_server = MockServer::start().await;
    mount_completion(&mock_server, "This message clearly needs follow-up.").await;

    let result = classifier_for(&mock_server)
        .try_classify("hello")
        .await
        .expect("should classify");

    assert_eq!(result.category, Category::Productive);
    assert_eq!(result.reply, "This message clearly needs follow-up.");
}

#[tokio::test]
async fn unparsable_brace_span_yields_no_result() {
    let mock_server = MockServer::start().await;
    mount_completion(&mock_server, "{definitely not json}").await;

    assert!(classifier_for(&mock_server).try_classify("hi").await.is_none());
}

#[tokio::test]
async fn server_error_yields_no_result() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    assert!(classifier_for(&mock_server).try_classify("hi").await.is_none());
}

#[tokio::test]
async fn malformed_transport_body_yields_no_result() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    assert!(classifier_for(&mock_server).try_classify("hi").await.is_none());
}
