//! Classification result entity

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::Category;

/// Where a classification came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSource {
    /// Produced by the remote language model
    Remote,
    /// Produced by the keyword fallback
    Fallback,
}

impl fmt::Display for ClassificationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Remote => "remote",
            Self::Fallback => "fallback",
        };
        write!(f, "{s}")
    }
}

/// The outcome of classifying one email
///
/// Created fresh per request and never mutated. The reply may be empty only
/// when a remote response carried no reply text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Triage category
    pub category: Category,
    /// Suggested reply to send back
    pub reply: String,
    /// Provenance, used for tracing only
    pub source: ClassificationSource,
}

impl Classification {
    /// A classification produced by the remote model
    pub fn remote(category: Category, reply: impl Into<String>) -> Self {
        Self {
            category,
            reply: reply.into(),
            source: ClassificationSource::Remote,
        }
    }

    /// A classification produced by the keyword fallback
    pub fn fallback(category: Category, reply: impl Into<String>) -> Self {
        Self {
            category,
            reply: reply.into(),
            source: ClassificationSource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_constructor() {
        let c = Classification::remote(Category::Productive, "On it.");
        assert_eq!(c.category, Category::Productive);
        assert_eq!(c.reply, "On it.");
        assert_eq!(c.source, ClassificationSource::Remote);
    }

    #[test]
    fn fallback_constructor() {
        let c = Classification::fallback(Category::Unproductive, "Thanks!");
        assert_eq!(c.source, ClassificationSource::Fallback);
    }

    #[test]
    fn source_display() {
        assert_eq!(ClassificationSource::Remote.to_string(), "remote");
        assert_eq!(ClassificationSource::Fallback.to_string(), "fallback");
    }

    #[test]
    fn serialization() {
        let c = Classification::remote(Category::Productive, "reply");
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"category\":\"productive\""));
        assert!(json.contains("\"source\":\"remote\""));
    }
}
