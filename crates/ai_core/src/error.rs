//! Inference errors

use thiserror::Error;

/// Errors that can occur during a remote inference call
#[derive(Debug, Error)]
pub enum InferenceError {
    /// No API credential is configured
    #[error("No API credential configured")]
    MissingCredential,

    /// Failed to connect to the inference endpoint
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the inference endpoint failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Endpoint returned a non-success status
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30_000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
