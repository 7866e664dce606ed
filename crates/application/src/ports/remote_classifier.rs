//! Port for the remote language-model classifier
//!
//! The remote path is best-effort by contract: an adapter reports
//! unavailability or failure as "no result", never as an error, so the
//! orchestrator can fall back without inspecting failure causes.

use async_trait::async_trait;
use domain::Classification;

/// Port for remote classification attempts
#[async_trait]
pub trait RemoteClassifierPort: Send + Sync {
    /// Try to classify `text` remotely
    ///
    /// Returns `None` when the integration is not configured, the call
    /// fails (network, auth, quota), or the response cannot be turned into
    /// a classification. Implementations must not propagate errors.
    async fn try_classify(&self, text: &str) -> Option<Classification>;
}
