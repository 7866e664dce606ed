//! Plain-text file adapter

use std::path::Path;

use application::{ExtractionError, TextExtractorPort};
use async_trait::async_trait;
use domain::ContentType;

/// Reads `.txt` uploads
///
/// Decoding is lossy: invalid UTF-8 bytes become replacement characters
/// instead of failing the extraction.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextAdapter;

#[async_trait]
impl TextExtractorPort for PlainTextAdapter {
    async fn extract(
        &self,
        path: &Path,
        content_type: ContentType,
    ) -> Result<String, ExtractionError> {
        if content_type != ContentType::Text {
            return Err(ExtractionError::Unsupported(content_type));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ExtractionError::Io(e.to_string()))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
