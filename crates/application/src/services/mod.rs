//! Application services

mod classification_service;
mod keyword_classifier;

pub use classification_service::ClassificationService;
pub use keyword_classifier::{
    classify_fallback, COURTESY_KEYWORDS, PRODUCTIVE_KEYWORDS, REPLY_ACKNOWLEDGMENT,
    REPLY_BLANK, REPLY_COURTESY, REPLY_DEFAULT,
};
