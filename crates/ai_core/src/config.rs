//! Configuration for the remote inference client

use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for the OpenAI-compatible chat-completions client
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the API (up to and including the version segment)
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// API credential; absent means the remote path is disabled
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Model to request
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature; classification wants a deterministic 0.0
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

const fn default_timeout_ms() -> u64 {
    30_000
}

const fn default_max_tokens() -> u32 {
    300
}

const fn default_temperature() -> f32 {
    0.0
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_key: None,
            model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl InferenceConfig {
    /// Fill the credential from `OPENAI_API_KEY` when the config carries none
    #[must_use]
    pub fn with_env_credential(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from);
        }
        self
    }

    /// Whether the remote path can be used at all
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(config.api_base, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout_ms, 30_000);
        assert_eq!(config.max_tokens, 300);
        assert!((config.temperature - 0.0).abs() < f32::EPSILON);
        assert!(config.api_key.is_none());
        assert!(!config.is_configured());
    }

    #[test]
    fn deserialization_with_defaults() {
        let config: InferenceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert!(!config.is_configured());
    }

    #[test]
    fn deserialization_with_credential() {
        let json = r#"{"api_base":"http://localhost:8080/v1","api_key":"sk-test"}"#;
        let config: InferenceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.api_base, "http://localhost:8080/v1");
        assert!(config.is_configured());
    }

    #[test]
    fn debug_does_not_leak_the_credential() {
        let json = r#"{"api_key":"sk-super-secret"}"#;
        let config: InferenceConfig = serde_json::from_str(json).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-super-secret"));
    }
}
