//! No-op remote classifier

use application::RemoteClassifierPort;
use async_trait::async_trait;
use domain::Classification;

/// Remote classifier for processes without a configured integration
///
/// Always reports "no result", which routes every request to the keyword
/// fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRemoteClassifier;

#[async_trait]
impl RemoteClassifierPort for NoopRemoteClassifier {
    async fn try_classify(&self, _text: &str) -> Option<Classification> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_declines() {
        assert!(NoopRemoteClassifier.try_classify("anything").await.is_none());
        assert!(NoopRemoteClassifier.try_classify("").await.is_none());
    }
}
