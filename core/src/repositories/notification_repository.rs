//! Notification repository trait.

use async_trait::async_trait;

use crate::domain::entities::notification::Notification;
use crate::errors::DomainError;

/// Repository trait for notification reads
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// List every notification row.
    async fn list_all(&self) -> Result<Vec<Notification>, DomainError>;

    /// List notifications addressed to one user, newest first.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Notification>, DomainError>;
}
