//! PDF file adapter over `lopdf`

use std::path::Path;
use std::time::Duration;

use application::{ExtractionError, TextExtractorPort};
use async_trait::async_trait;
use domain::ContentType;
use lopdf::Document;
use tracing::{debug, instrument};

// Pathological PDFs can spin the parser; bound the blocking work.
const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts text from `.pdf` uploads
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfAdapter;

impl PdfAdapter {
    /// Create a new adapter
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn extract_all_pages(path: &Path) -> Result<String, ExtractionError> {
        let doc =
            Document::load(path).map_err(|e| ExtractionError::Parse(e.to_string()))?;

        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        if pages.is_empty() {
            return Ok(String::new());
        }

        doc.extract_text(&pages)
            .map_err(|e| ExtractionError::Parse(e.to_string()))
    }
}

#[async_trait]
impl TextExtractorPort for PdfAdapter {
    #[instrument(skip(self), fields(path = %path.display()))]
    async fn extract(
        &self,
        path: &Path,
        content_type: ContentType,
    ) -> Result<String, ExtractionError> {
        if content_type != ContentType::Pdf {
            return Err(ExtractionError::Unsupported(content_type));
        }

        let path = path.to_path_buf();
        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_all_pages(&path)),
        )
        .await
        .map_err(|_| ExtractionError::Parse("PDF extraction timed out".to_string()))?
        .map_err(|e| ExtractionError::Io(format!("task join error: {e}")))??;

        debug!(chars = text.len(), "PDF text extraction complete");
        Ok(text)
    }
}
