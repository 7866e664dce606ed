//! Append-only flat-file audit log
//!
//! One pipe-delimited line per classification:
//!
//! ```text
//! <ISO-8601 UTC timestamp> | <category label> | <snippet>
//! ```
//!
//! No header, no rotation. Each line goes out in a single `write` on a
//! file opened with `O_APPEND`, which is what keeps concurrent writers
//! from interleaving partial lines.

use std::path::PathBuf;

use application::{ApplicationError, AuditSinkPort};
use async_trait::async_trait;
use chrono::SecondsFormat;
use domain::AuditRecord;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

/// File-backed implementation of [`AuditSinkPort`]
#[derive(Debug, Clone)]
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    /// Create a log that appends to `path`; the file is created on first use
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Render one record as its log line, newline included
    fn format_line(record: &AuditRecord) -> String {
        format!(
            "{} | {} | {}\n",
            record
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            record.category.label(),
            record.snippet
        )
    }
}

#[async_trait]
impl AuditSinkPort for FileAuditLog {
    #[instrument(skip(self, record), fields(category = %record.category))]
    async fn append(&self, record: &AuditRecord) -> Result<(), ApplicationError> {
        let line = Self::format_line(record);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| ApplicationError::AuditSink(e.to_string()))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| ApplicationError::AuditSink(e.to_string()))?;

        file.flush()
            .await
            .map_err(|e| ApplicationError::AuditSink(e.to_string()))?;

        debug!("Appended audit record");
        Ok(())
    }
}
