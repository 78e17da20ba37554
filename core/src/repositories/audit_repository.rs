//! Audit log repository trait.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Repository trait for audit log persistence
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append an audit entry for a user action.
    async fn record(&self, user_id: i64, action: &str) -> Result<(), DomainError>;
}

/// No-op implementation for wiring paths that do not need auditing
pub struct NoOpAuditLogRepository;

#[async_trait]
impl AuditLogRepository for NoOpAuditLogRepository {
    async fn record(&self, _user_id: i64, _action: &str) -> Result<(), DomainError> {
        Ok(())
    }
}
