//! Verdict parsing for classification responses
//!
//! The model is asked to answer with a JSON object carrying `category` and
//! `reply`, but chat models routinely wrap the payload in prose or code
//! fences. The parser takes the greedy span from the first `{` to the last
//! `}` (newlines included) and reads that as JSON; a response with no
//! braces at all is taken as a bare reply.

use serde::Deserialize;

use crate::error::InferenceError;

/// Structured payload recovered from a model response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Category label, exactly as the model produced it; `None` when the
    /// payload carried no `category` field
    pub category: Option<String>,
    /// Suggested reply text
    pub reply: String,
}

#[derive(Debug, Deserialize)]
struct VerdictPayload {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    reply: Option<String>,
}

/// The greedy `{...}` span of `text`, when one exists
fn json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Parse a model response into a [`Verdict`]
///
/// # Errors
///
/// Returns [`InferenceError::InvalidResponse`] when the response contains a
/// brace span that is not valid JSON; callers treat that as "no result".
pub fn parse_verdict(response: &str) -> Result<Verdict, InferenceError> {
    match json_span(response) {
        Some(span) => {
            let payload: VerdictPayload = serde_json::from_str(span)
                .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;
            Ok(Verdict {
                category: payload.category,
                reply: payload.reply.unwrap_or_default(),
            })
        },
        // No JSON anywhere: the whole response is the reply
        None => Ok(Verdict {
            category: None,
            reply: response.to_string(),
        }),
    }
}
