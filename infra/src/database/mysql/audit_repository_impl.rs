//! MySQL implementation of the AuditLogRepository trait.

use async_trait::async_trait;
use sqlx::MySqlPool;

use dh_core::errors::DomainError;
use dh_core::repositories::AuditLogRepository;

use super::store_error;

/// MySQL implementation of AuditLogRepository backed by the `logs` table
pub struct MySqlAuditLogRepository {
    pool: MySqlPool,
}

impl MySqlAuditLogRepository {
    /// Create a new MySQL audit log repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for MySqlAuditLogRepository {
    async fn record(&self, user_id: i64, action: &str) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO logs (user_id, action, created_at) VALUES (?, ?, NOW())")
            .bind(user_id)
            .bind(action)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to record audit entry", e))?;

        Ok(())
    }
}
