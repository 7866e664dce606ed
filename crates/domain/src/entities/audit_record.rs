//! Audit record entity - one append-only line per classification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Category;

/// Maximum snippet length, in characters
pub const SNIPPET_MAX_CHARS: usize = 200;

/// One record of a classification event
///
/// Records are appended in call order and never updated or deleted. The
/// snippet keeps the first [`SNIPPET_MAX_CHARS`] characters of the input
/// with line breaks flattened to spaces, so a record always fits one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// When the classification happened
    pub timestamp: DateTime<Utc>,
    /// The category that was returned to the requester
    pub category: Category,
    /// Flattened prefix of the classified text
    pub snippet: String,
}

impl AuditRecord {
    /// Build a record for a classification of `text`, stamped now
    pub fn new(category: Category, text: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            category,
            snippet: Self::snippet_of(text),
        }
    }

    /// Override the timestamp (tests and replay tooling)
    #[must_use]
    pub const fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// The snippet stored for `text`: first [`SNIPPET_MAX_CHARS`] characters,
    /// newlines and carriage returns replaced with spaces
    #[must_use]
    pub fn snippet_of(text: &str) -> String {
        text.chars()
            .take(SNIPPET_MAX_CHARS)
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect()
    }
}
