//! Application state shared across handlers

use std::sync::Arc;

use application::{ClassificationService, TextExtractorPort};
use infrastructure::UploadStore;

use crate::templates::PageTemplates;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Classification orchestrator
    pub classifier: Arc<ClassificationService>,
    /// Text extraction for uploaded files
    pub extractor: Arc<dyn TextExtractorPort>,
    /// Upload storage
    pub uploads: Arc<UploadStore>,
    /// Page templates
    pub templates: Arc<PageTemplates>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
