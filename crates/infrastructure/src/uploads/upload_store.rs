//! Filesystem store for uploaded email files
//!
//! Uploads land in one flat directory under a sanitized name with a unique
//! prefix. Sanitization strips path components and anything shell-hostile,
//! so a stored name can always be safely joined back onto the directory.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Errors from upload storage
#[derive(Debug, Error)]
pub enum UploadError {
    /// The requested filename cannot name a stored upload
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    /// Filesystem failure
    #[error("Upload storage error: {0}")]
    Io(String),
}

/// A successfully stored upload
#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// Name the file was stored under (unique within the directory)
    pub stored_name: String,
    /// Full path of the stored file
    pub path: PathBuf,
}

/// Flat-directory upload store
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The storage directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the storage directory if it does not exist yet
    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| UploadError::Io(e.to_string()))
    }

    /// Reduce a client-supplied filename to a safe flat name
    ///
    /// Path components are dropped, whitespace becomes `_`, anything
    /// outside `[A-Za-z0-9._-]` is stripped, and leading dots are removed
    /// so the result can never be a hidden file or a traversal step. An
    /// empty result becomes `upload`.
    #[must_use]
    pub fn sanitize_filename(name: &str) -> String {
        let last_component = name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default();

        let cleaned: String = last_component
            .chars()
            .filter_map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    Some(c)
                } else if c.is_whitespace() {
                    Some('_')
                } else {
                    None
                }
            })
            .collect();

        let cleaned = cleaned.trim_start_matches('.');
        if cleaned.is_empty() {
            "upload".to_string()
        } else {
            cleaned.to_string()
        }
    }

    /// Store `bytes` under a sanitized, uniquely prefixed name
    #[instrument(skip(self, bytes), fields(original = %original_name, bytes = bytes.len()))]
    pub async fn save(
        &self,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<StoredUpload, UploadError> {
        self.ensure_dir().await?;

        let token = Uuid::new_v4().simple().to_string();
        let stored_name = format!(
            "{}-{}",
            &token[..8],
            Self::sanitize_filename(original_name)
        );
        let path = self.dir.join(&stored_name);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| UploadError::Io(e.to_string()))?;

        debug!(stored = %stored_name, "Stored upload");
        Ok(StoredUpload { stored_name, path })
    }

    /// Resolve a stored name back to its path
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::InvalidFilename`] when `stored_name` is not a
    /// name this store could have produced (traversal attempts included).
    pub fn resolve(&self, stored_name: &str) -> Result<PathBuf, UploadError> {
        if stored_name.is_empty() || Self::sanitize_filename(stored_name) != stored_name {
            return Err(UploadError::InvalidFilename(stored_name.to_string()));
        }
        Ok(self.dir.join(stored_name))
    }
}
