//! Chat-completions client implementation

use std::time::Duration;

use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;

/// A chat-completions request, independent of the wire format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Messages in the conversation
    pub messages: Vec<CompletionMessage>,
    /// Model to use (overrides the config default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// A message in the request (OpenAI-compatible roles)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: String,
}

impl CompletionRequest {
    /// Create a simple single-turn request
    pub fn simple(user_message: impl Into<String>) -> Self {
        Self {
            messages: vec![CompletionMessage {
                role: "user".to_string(),
                content: user_message.into(),
            }],
            model: None,
        }
    }

    /// Create a request with a system prompt
    pub fn with_system(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![
                CompletionMessage {
                    role: "system".to_string(),
                    content: system.into(),
                },
                CompletionMessage {
                    role: "user".to_string(),
                    content: user.into(),
                },
            ],
            model: None,
        }
    }

    /// Set the model for this request
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Response from a completion call
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated content of the first choice
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage, when the endpoint reports it
    pub usage: Option<TokenUsage>,
}

/// Token usage statistics
#[derive(Debug, Clone, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Client for OpenAI-compatible `/chat/completions` endpoints
pub struct ChatCompletionsClient {
    client: Client,
    config: InferenceConfig,
}

impl std::fmt::Debug for ChatCompletionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionsClient")
            .field("api_base", &self.config.api_base)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

/// OpenAI-format chat request
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI-format chat response
#[derive(Debug, Deserialize)]
struct ChatResponse {
    model: Option<String>,
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl ChatCompletionsClient {
    /// Create a new client
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            api_base = %config.api_base,
            model = %config.model,
            configured = config.is_configured(),
            "Initialized chat-completions client"
        );

        Ok(Self { client, config })
    }

    /// Build the completions URL
    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }

    /// Get the model to use for a request
    fn resolve_model<'a>(&'a self, request: &'a CompletionRequest) -> &'a str {
        request.model.as_deref().unwrap_or(&self.config.model)
    }

    /// Run a completion and return the first choice
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request)))]
    pub async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, InferenceError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(InferenceError::MissingCredential)?;

        let model = self.resolve_model(&request).to_string();

        let chat_request = ChatRequest {
            model: model.clone(),
            messages: request
                .messages
                .into_iter()
                .map(|m| ChatMessage {
                    role: m.role,
                    content: m.content,
                })
                .collect(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!("Sending chat-completions request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key.expose_secret())
            .json(&chat_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Chat-completions request failed");
            return Err(InferenceError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                InferenceError::InvalidResponse("response carried no choices".to_string())
            })?;

        debug!(usage = ?chat_response.usage, "Completion received");

        Ok(CompletionResponse {
            content,
            model: chat_response.model.unwrap_or(model),
            usage: chat_response.usage,
        })
    }
}
