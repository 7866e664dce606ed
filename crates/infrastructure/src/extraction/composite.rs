//! Composite extractor dispatching on content type

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use application::{ExtractionError, TextExtractorPort};
use async_trait::async_trait;
use domain::ContentType;

/// Dispatches extraction to the adapter registered for a content type
pub struct CompositeTextExtractor {
    adapters: HashMap<ContentType, Arc<dyn TextExtractorPort>>,
}

impl std::fmt::Debug for CompositeTextExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeTextExtractor")
            .field("types", &self.adapters.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl CompositeTextExtractor {
    /// Build a composite from `(type, adapter)` pairs
    #[must_use]
    pub fn new(adapters: Vec<(ContentType, Arc<dyn TextExtractorPort>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// Whether an adapter is registered for `content_type`
    #[must_use]
    pub fn supports(&self, content_type: ContentType) -> bool {
        self.adapters.contains_key(&content_type)
    }
}

#[async_trait]
impl TextExtractorPort for CompositeTextExtractor {
    async fn extract(
        &self,
        path: &Path,
        content_type: ContentType,
    ) -> Result<String, ExtractionError> {
        let adapter = self
            .adapters
            .get(&content_type)
            .ok_or(ExtractionError::Unsupported(content_type))?;

        adapter.extract(path, content_type).await
    }
}
