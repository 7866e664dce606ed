//! Classification orchestrator
//!
//! Tries the remote classifier first and falls back to the keyword rules,
//! so classification as a whole is total: every call returns a category
//! and a reply. Each call appends exactly one audit record on every path.

use std::fmt;
use std::sync::Arc;

use domain::{AuditRecord, Classification, EmailText};
use tracing::{debug, instrument, warn};

use crate::ports::{AuditSinkPort, RemoteClassifierPort};
use crate::services::keyword_classifier::classify_fallback;

/// Service that orchestrates remote and fallback classification
pub struct ClassificationService {
    remote: Arc<dyn RemoteClassifierPort>,
    audit: Arc<dyn AuditSinkPort>,
}

impl fmt::Debug for ClassificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationService").finish_non_exhaustive()
    }
}

impl ClassificationService {
    /// Create a new orchestrator over a remote port and an audit sink
    pub fn new(remote: Arc<dyn RemoteClassifierPort>, audit: Arc<dyn AuditSinkPort>) -> Self {
        Self { remote, audit }
    }

    /// Classify one email
    ///
    /// Never fails: a remote "no result" silently falls back to the
    /// keyword classifier. The audit record carries the returned category
    /// and the snippet of the original input; a sink failure is logged and
    /// does not affect the response.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn classify(&self, text: &EmailText) -> Classification {
        let classification = match self.remote.try_classify(text.as_str()).await {
            Some(remote) => {
                debug!(category = %remote.category, "remote classification accepted");
                remote
            },
            None => {
                debug!("no remote result, using keyword fallback");
                classify_fallback(text.as_str())
            },
        };

        let record = AuditRecord::new(classification.category, text.as_str());
        if let Err(error) = self.audit.append(&record).await {
            warn!(%error, "failed to append audit record");
        }

        classification
    }
}
