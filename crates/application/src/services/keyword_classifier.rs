//! Keyword fallback classifier
//!
//! The deterministic classifier used whenever no remote result is
//! available. A plain ordered substring scan: transparent enough to be a
//! trustworthy last line of defense, and cheap enough to run on every
//! request.

use domain::{Category, Classification};

/// Reply for blank submissions
pub const REPLY_BLANK: &str = "Thanks for the message!";

/// Reply for messages that need action from the desk
pub const REPLY_ACKNOWLEDGMENT: &str = "Hello, we received your e-mail. Thank you for \
     contacting us; we will review your request and get back to you within one business \
     day. If possible, share more details or attach the relevant files.";

/// Reply for courtesy messages
pub const REPLY_COURTESY: &str = "Thank you for reaching out!";

/// Reply when no keyword matches
pub const REPLY_DEFAULT: &str = "Thanks for reaching out!";

/// Keywords that mark a message as needing action.
///
/// Scanned first, in order; the first hit wins. The desk serves English-
/// and Portuguese-speaking customers, so the list carries both languages:
/// English terms first, then the Portuguese terms carried over from the
/// legacy deployment. Order is load-bearing for reproducibility - do not
/// reorder.
pub const PRODUCTIVE_KEYWORDS: &[&str] = &[
    "status",
    "error",
    "help",
    "ticket",
    "urgent",
    "erro",
    "problema",
    "solicitação",
    "solicitacao",
    "anexo",
    "relatório",
    "relatorio",
    "suporte",
    "falha",
    "incidente",
    "reunião",
    "reuniao",
    "agendar",
    "pendente",
];

/// Keywords that mark a message as pure courtesy.
///
/// Scanned only after the whole productive list missed. Same ordering
/// contract as [`PRODUCTIVE_KEYWORDS`].
pub const COURTESY_KEYWORDS: &[&str] = &[
    "thanks",
    "thank you",
    "congratulations",
    "happy holidays",
    "obrigado",
    "obrigada",
    "feliz natal",
    "boas festas",
    "parabéns",
    "parabens",
    "abraços",
    "abracos",
];

/// Classify `text` with the keyword rules
///
/// Total over all string inputs; never fails. Blank text is courtesy-
/// acknowledged, any productive keyword wins over any courtesy keyword,
/// and unmatched text defaults to [`Category::Unproductive`] so ambiguous
/// messages are never classified as needing action.
#[must_use]
pub fn classify_fallback(text: &str) -> Classification {
    if text.trim().is_empty() {
        return Classification::fallback(Category::Unproductive, REPLY_BLANK);
    }

    let lowered = text.to_lowercase();

    for keyword in PRODUCTIVE_KEYWORDS {
        if lowered.contains(keyword) {
            return Classification::fallback(Category::Productive, REPLY_ACKNOWLEDGMENT);
        }
    }

    for keyword in COURTESY_KEYWORDS {
        if lowered.contains(keyword) {
            return Classification::fallback(Category::Unproductive, REPLY_COURTESY);
        }
    }

    Classification::fallback(Category::Unproductive, REPLY_DEFAULT)
}
