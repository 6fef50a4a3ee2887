//! Audit log port.

use crate::domain::LogEntry;
use crate::error::AuditError;

/// Append-only store for audit lines.
///
/// Each call appends exactly one line. Implementations must not hold the
/// underlying resource open between calls.
#[async_trait::async_trait]
pub trait AuditLog: Send + Sync + 'static {
    async fn append(&self, entry: &LogEntry) -> Result<(), AuditError>;
}
