//! Remote classifier over the chat-completions client
//!
//! Converts every failure into "no result" so the orchestrator can fall
//! back without inspecting causes: transport errors, unparsable payloads,
//! and category labels outside the taxonomy all end the attempt here.

use ai_core::{parse_verdict, ChatCompletionsClient, CompletionRequest};
use application::RemoteClassifierPort;
use async_trait::async_trait;
use domain::{Category, Classification};
use tracing::{debug, instrument, warn};

/// Instructions sent ahead of the email text. The category labels are the
/// legacy Portuguese wire labels; `Category::parse` accepts them.
const SYSTEM_PROMPT: &str = "You classify support e-mails as 'Produtivo' (needs action) or \
     'Improdutivo' (courtesy, no action needed) and write an appropriate short reply to the \
     sender. Answer with a JSON object with keys: category and reply. \
     Example: {\"category\": \"Produtivo\", \"reply\": \"...\"}";

/// [`RemoteClassifierPort`] adapter over an OpenAI-compatible endpoint
#[derive(Debug)]
pub struct OpenAiRemoteClassifier {
    client: ChatCompletionsClient,
}

impl OpenAiRemoteClassifier {
    /// Wrap a chat-completions client
    #[must_use]
    pub fn new(client: ChatCompletionsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteClassifierPort for OpenAiRemoteClassifier {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn try_classify(&self, text: &str) -> Option<Classification> {
        let request = CompletionRequest::with_system(SYSTEM_PROMPT, text);

        let response = match self.client.complete(request).await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "remote classification call failed");
                return None;
            },
        };

        let verdict = match parse_verdict(&response.content) {
            Ok(verdict) => verdict,
            Err(error) => {
                warn!(%error, "remote response carried an unparsable payload");
                return None;
            },
        };

        let category = match verdict.category {
            Some(label) => match Category::parse(&label) {
                Ok(category) => category,
                Err(error) => {
                    // Taxonomy violation: void the attempt and let the
                    // keyword fallback decide.
                    warn!(%error, "remote category outside the taxonomy");
                    return None;
                },
            },
            // Payload without a category defaults to Productive, matching
            // the legacy behavior for replies the model refused to label.
            None => Category::Productive,
        };

        debug!(%category, "remote classification succeeded");
        Some(Classification::remote(category, verdict.reply))
    }
}
