//! Port for the classification audit sink
//!
//! One record per classification, append-only. Injected into the
//! orchestrator so the side effect stays testable with a fake sink.

use async_trait::async_trait;
use domain::AuditRecord;

use crate::error::ApplicationError;

/// Port for audit record storage
#[async_trait]
pub trait AuditSinkPort: Send + Sync {
    /// Append one record; records are never updated or deleted
    async fn append(&self, record: &AuditRecord) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use domain::Category;
    use tokio::sync::Mutex;

    use super::*;

    /// In-memory sink used across the application tests
    #[derive(Default)]
    struct MemorySink {
        records: Arc<Mutex<Vec<AuditRecord>>>,
    }

    #[async_trait]
    impl AuditSinkPort for MemorySink {
        async fn append(&self, record: &AuditRecord) -> Result<(), ApplicationError> {
            self.records.lock().await.push(record.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn appends_preserve_order() {
        let sink = MemorySink::default();
        sink.append(&AuditRecord::new(Category::Productive, "first"))
            .await
            .unwrap();
        sink.append(&AuditRecord::new(Category::Unproductive, "second"))
            .await
            .unwrap();

        let records = sink.records.lock().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].snippet, "first");
        assert_eq!(records[1].snippet, "second");
    }
}
