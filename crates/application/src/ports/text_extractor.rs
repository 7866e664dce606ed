//! Port for extracting text out of uploaded files

use std::path::Path;

use async_trait::async_trait;
use domain::ContentType;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while extracting text from an upload
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The file could not be read
    #[error("Failed to read file: {0}")]
    Io(String),

    /// The file could not be parsed as its declared type
    #[error("Failed to parse file: {0}")]
    Parse(String),

    /// No adapter is available for this content type
    #[error("No extractor available for {0} files")]
    Unsupported(ContentType),
}

/// Port for text extraction adapters
#[async_trait]
pub trait TextExtractorPort: Send + Sync {
    /// Extract the textual content of the file at `path`
    ///
    /// `content_type` is the type declared by the upload's extension; the
    /// adapter does not sniff file contents.
    async fn extract(
        &self,
        path: &Path,
        content_type: ContentType,
    ) -> Result<String, ExtractionError>;
}

/// Convenience over [`TextExtractorPort`] for callers that treat every
/// extraction failure as an empty submission
#[async_trait]
pub trait TextExtractorExt: TextExtractorPort {
    /// Extract text, recovering any failure to an empty string
    async fn extract_or_empty(&self, path: &Path, content_type: ContentType) -> String {
        match self.extract(path, content_type).await {
            Ok(text) => text,
            Err(error) => {
                warn!(%error, path = %path.display(), "text extraction failed, treating as empty");
                String::new()
            },
        }
    }
}

#[async_trait]
impl<T: TextExtractorPort + ?Sized> TextExtractorExt for T {}
