//! Email text value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// The text of an email under classification
///
/// Immutable once created; may be empty. Sourced from the form's text field
/// or from the text extracted out of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct EmailText {
    value: String,
}

impl EmailText {
    /// Wrap a string as email text
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The raw text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Empty or whitespace-only
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Whether the text is the empty string
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for EmailText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<String> for EmailText {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for EmailText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
