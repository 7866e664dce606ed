//! Infrastructure layer - adapters over the filesystem, the remote model,
//! and process configuration
//!
//! Implements the ports defined in the application layer.

pub mod audit;
pub mod config;
pub mod extraction;
pub mod remote;
pub mod uploads;

pub use audit::FileAuditLog;
pub use config::{AppConfig, AuditConfig, ServerConfig, UploadsConfig};
pub use extraction::{default_extractor, CompositeTextExtractor, PlainTextAdapter};
#[cfg(feature = "pdf")]
pub use extraction::PdfAdapter;
pub use remote::{select_remote_classifier, NoopRemoteClassifier, OpenAiRemoteClassifier};
pub use uploads::{StoredUpload, UploadError, UploadStore};
