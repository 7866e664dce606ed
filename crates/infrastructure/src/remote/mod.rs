//! Remote classifier adapters

mod noop;
mod openai_classifier;

use std::sync::Arc;

use ai_core::{ChatCompletionsClient, InferenceConfig};
use application::RemoteClassifierPort;
use tracing::{info, warn};

pub use noop::NoopRemoteClassifier;
pub use openai_classifier::OpenAiRemoteClassifier;

/// Pick the remote classifier for this process
///
/// Decided once at startup: with a credential configured the real adapter
/// is wired in; without one (or if the HTTP client cannot be built) every
/// request goes straight to the keyword fallback via the no-op adapter.
#[must_use]
pub fn select_remote_classifier(config: &InferenceConfig) -> Arc<dyn RemoteClassifierPort> {
    if !config.is_configured() {
        info!("no inference credential configured, remote classification disabled");
        return Arc::new(NoopRemoteClassifier);
    }

    match ChatCompletionsClient::new(config.clone()) {
        Ok(client) => {
            info!(model = %config.model, "remote classification enabled");
            Arc::new(OpenAiRemoteClassifier::new(client))
        },
        Err(error) => {
            warn!(%error, "failed to build inference client, remote classification disabled");
            Arc::new(NoopRemoteClassifier)
        },
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[tokio::test]
    async fn unconfigured_inference_selects_the_noop_adapter() {
        let config = InferenceConfig::default();
        let classifier = select_remote_classifier(&config);
        assert!(classifier.try_classify("urgent issue").await.is_none());
    }

    #[test]
    fn configured_inference_selects_the_real_adapter() {
        let config = InferenceConfig {
            api_key: Some(SecretString::from("sk-test")),
            ..Default::default()
        };
        // The adapter builds; whether calls succeed is up to the endpoint.
        let _classifier = select_remote_classifier(&config);
    }
}
