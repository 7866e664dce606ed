//! Audit log adapters

mod file_audit_log;

pub use file_audit_log::FileAuditLog;
