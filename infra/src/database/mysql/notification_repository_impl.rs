//! MySQL implementation of the NotificationRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use dh_core::domain::entities::notification::Notification;
use dh_core::errors::DomainError;
use dh_core::repositories::NotificationRepository;

use super::store_error;

/// MySQL implementation of NotificationRepository
pub struct MySqlNotificationRepository {
    pool: MySqlPool,
}

impl MySqlNotificationRepository {
    /// Create a new MySQL notification repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_notification(row: &sqlx::mysql::MySqlRow) -> Result<Notification, DomainError> {
        let read = |e: sqlx::Error| DomainError::Internal {
            message: format!("Failed to read notification row: {}", e),
        };

        Ok(Notification {
            id: row.try_get("id").map_err(read)?,
            user_id: row.try_get("user_id").map_err(read)?,
            message: row.try_get("message").map_err(read)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(read)?,
        })
    }
}

#[async_trait]
impl NotificationRepository for MySqlNotificationRepository {
    async fn list_all(&self) -> Result<Vec<Notification>, DomainError> {
        let rows = sqlx::query("SELECT id, user_id, message, created_at FROM notifications")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list notifications", e))?;

        rows.iter().map(Self::row_to_notification).collect()
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Notification>, DomainError> {
        let query = r#"
            SELECT id, user_id, message, created_at
            FROM notifications
            WHERE user_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list user notifications", e))?;

        rows.iter().map(Self::row_to_notification).collect()
    }
}
