//! AI Core - remote inference client
//!
//! Provides the OpenAI-compatible chat-completions client used for remote
//! email classification, and the verdict parser that digs a structured
//! `{"category", "reply"}` payload out of free-form model output.

pub mod config;
pub mod error;
pub mod openai;
pub mod verdict;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use openai::{
    ChatCompletionsClient, CompletionMessage, CompletionRequest, CompletionResponse, TokenUsage,
};
pub use verdict::{parse_verdict, Verdict};
