//! Upload storage

mod upload_store;

pub use upload_store::{StoredUpload, UploadError, UploadStore};
