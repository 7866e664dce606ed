//! Text extraction adapters
//!
//! One adapter per accepted content type, dispatched by a composite. The
//! PDF adapter is compiled in behind the `pdf` feature; a build without it
//! simply has no adapter registered for PDF uploads, and extraction then
//! reports the type as unsupported (which callers flatten to empty text).

mod composite;
#[cfg(feature = "pdf")]
mod pdf_adapter;
mod plain_text_adapter;

use std::sync::Arc;

use application::TextExtractorPort;
use domain::ContentType;

pub use composite::CompositeTextExtractor;
#[cfg(feature = "pdf")]
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;

/// The extractor wired from the adapters this build carries
#[must_use]
pub fn default_extractor() -> CompositeTextExtractor {
    #[cfg_attr(not(feature = "pdf"), allow(unused_mut))]
    let mut adapters: Vec<(ContentType, Arc<dyn TextExtractorPort>)> =
        vec![(ContentType::Text, Arc::new(PlainTextAdapter))];

    #[cfg(feature = "pdf")]
    adapters.push((ContentType::Pdf, Arc::new(PdfAdapter::new())));

    #[cfg(not(feature = "pdf"))]
    tracing::warn!("built without the pdf feature; PDF uploads will yield empty text");

    CompositeTextExtractor::new(adapters)
}
