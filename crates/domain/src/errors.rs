//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A category label outside the two-value taxonomy
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// A file extension outside the upload whitelist
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
}
