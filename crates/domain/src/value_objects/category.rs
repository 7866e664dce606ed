//! Classification category value object
//!
//! The two-valued outcome of triaging an email. The deployment this service
//! replaces served a Brazilian support desk, and its audit-log and UI labels
//! (`Produtivo` / `Improdutivo`) are preserved as the wire labels here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Triage outcome for an email
///
/// `Productive` means the message needs action from the support desk;
/// `Unproductive` covers courtesy and everything ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Needs a follow-up action (ticket, incident, request, ...)
    Productive,
    /// Courtesy message or anything that needs no action
    #[default]
    Unproductive,
}

impl Category {
    /// Legacy wire label, used in the audit log and the result page
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Productive => "Produtivo",
            Self::Unproductive => "Improdutivo",
        }
    }

    /// Parse a label into a category, accepting both the English
    /// identifiers and the legacy Portuguese labels, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCategory`] for anything outside the
    /// two-value taxonomy.
    pub fn parse(label: &str) -> Result<Self, DomainError> {
        match label.trim().to_lowercase().as_str() {
            "productive" | "produtivo" => Ok(Self::Productive),
            "unproductive" | "improdutivo" => Ok(Self::Unproductive),
            _ => Err(DomainError::InvalidCategory(label.trim().to_string())),
        }
    }

    /// Whether this category asks the desk to act
    #[must_use]
    pub const fn needs_action(&self) -> bool {
        matches!(self, Self::Productive)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_the_legacy_wire_labels() {
        assert_eq!(Category::Productive.label(), "Produtivo");
        assert_eq!(Category::Unproductive.label(), "Improdutivo");
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Category::Productive.to_string(), "Produtivo");
        assert_eq!(Category::Unproductive.to_string(), "Improdutivo");
    }

    #[test]
    fn parse_accepts_english_identifiers() {
        assert_eq!(Category::parse("Productive").unwrap(), Category::Productive);
        assert_eq!(
            Category::parse("unproductive").unwrap(),
            Category::Unproductive
        );
    }

    #[test]
    fn parse_accepts_legacy_labels() {
        assert_eq!(Category::parse("Produtivo").unwrap(), Category::Productive);
        assert_eq!(
            Category::parse("IMPRODUTIVO").unwrap(),
            Category::Unproductive
        );
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(
            Category::parse("  produtivo \n").unwrap(),
            Category::Productive
        );
    }

    #[test]
    fn parse_rejects_novel_labels() {
        assert!(Category::parse("Spam").is_err());
        assert!(Category::parse("").is_err());
        assert!(Category::parse("produtivo!").is_err());
    }

    #[test]
    fn from_str_round_trip() {
        let category: Category = "Produtivo".parse().unwrap();
        assert_eq!(category, Category::Productive);
    }

    #[test]
    fn default_is_unproductive() {
        assert_eq!(Category::default(), Category::Unproductive);
    }

    #[test]
    fn needs_action() {
        assert!(Category::Productive.needs_action());
        assert!(!Category::Unproductive.needs_action());
    }

    #[test]
    fn serialization_uses_english_identifiers() {
        let json = serde_json::to_string(&Category::Productive).unwrap();
        assert_eq!(json, "\"productive\"");
        let parsed: Category = serde_json::from_str("\"unproductive\"").unwrap();
        assert_eq!(parsed, Category::Unproductive);
    }
}
