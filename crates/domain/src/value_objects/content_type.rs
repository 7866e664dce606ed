//! Upload content type value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The two file types accepted by the upload form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Plain text (`.txt`)
    Text,
    /// Portable Document Format (`.pdf`)
    Pdf,
}

impl ContentType {
    /// Resolve a content type from a bare file extension (no dot)
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnsupportedFileType`] for anything other than
    /// `txt` or `pdf` (case-insensitive).
    pub fn from_extension(extension: &str) -> Result<Self, DomainError> {
        match extension.to_lowercase().as_str() {
            "txt" => Ok(Self::Text),
            "pdf" => Ok(Self::Pdf),
            other => Err(DomainError::UnsupportedFileType(other.to_string())),
        }
    }

    /// Resolve a content type from a filename
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnsupportedFileType`] when the filename has no
    /// extension or an extension outside the whitelist.
    pub fn from_filename(filename: &str) -> Result<Self, DomainError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .ok_or_else(|| DomainError::UnsupportedFileType(filename.to_string()))?;
        Self::from_extension(extension)
    }

    /// Canonical extension, without the dot
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Pdf => "pdf",
        }
    }

    /// MIME type for download responses
    #[must_use]
    pub const fn as_mime(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Pdf => "application/pdf",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
