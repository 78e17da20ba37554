//! Audit service for recording authentication events.
//!
//! Audit writes are observability, not control flow: a failed write is
//! logged and swallowed so it can never fail a login.

use std::sync::Arc;

use crate::repositories::AuditLogRepository;

/// Service for appending audit log entries
pub struct AuditService {
    repository: Arc<dyn AuditLogRepository>,
    /// When true, writes are spawned off the request path.
    async_writes: bool,
}

impl AuditService {
    /// Create a new audit service with asynchronous writes.
    pub fn new(repository: Arc<dyn AuditLogRepository>) -> Self {
        Self {
            repository,
            async_writes: true,
        }
    }

    /// Create an audit service that writes inline.
    ///
    /// Used by tests that assert on recorded entries.
    pub fn new_inline(repository: Arc<dyn AuditLogRepository>) -> Self {
        Self {
            repository,
            async_writes: false,
        }
    }

    /// Record an action for a user.
    pub async fn record(&self, user_id: i64, action: &str) {
        if self.async_writes {
            let repository = Arc::clone(&self.repository);
            let action = action.to_string();
            tokio::spawn(async move {
                if let Err(e) = repository.record(user_id, &action).await {
                    tracing::warn!(user_id, %action, error = %e, "audit write failed");
                }
            });
        } else if let Err(e) = self.repository.record(user_id, action).await {
            tracing::warn!(user_id, %action, error = %e, "audit write failed");
        }
    }
}
