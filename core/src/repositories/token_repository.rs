//! Refresh token repository trait.

use async_trait::async_trait;

use crate::domain::entities::token::{NewRefreshToken, RefreshToken};
use crate::errors::DomainError;

/// Repository trait for refresh token persistence
///
/// Access tokens are never persisted; only refresh tokens get a row.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert a refresh token row issued at login.
    async fn insert(&self, token: NewRefreshToken) -> Result<RefreshToken, DomainError>;

    /// Look up a refresh token row by its token string.
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Row found (may still be expired)
    /// * `Ok(None)` - No such token
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Delete a user's expired refresh token rows.
    ///
    /// Called opportunistically at login so the table stays bounded without
    /// a background sweeper.
    ///
    /// # Returns
    /// * `Ok(count)` - Number of rows removed
    async fn delete_expired_for_user(&self, user_id: i64) -> Result<u64, DomainError>;
}
