//! OpenAI-compatible chat-completions client

mod client;

pub use client::{
    ChatCompletionsClient, CompletionMessage, CompletionRequest, CompletionResponse, TokenUsage,
};
