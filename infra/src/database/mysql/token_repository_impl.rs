//! MySQL implementation of the TokenRepository trait.
//!
//! Refresh tokens are stored as issued and looked up by their token string;
//! expiry is enforced at refresh time plus an opportunistic per-user sweep.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use dh_core::domain::entities::token::{NewRefreshToken, RefreshToken};
use dh_core::errors::DomainError;
use dh_core::repositories::TokenRepository;

use super::store_error;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let read = |e: sqlx::Error| DomainError::Internal {
            message: format!("Failed to read refresh token row: {}", e),
        };

        Ok(RefreshToken {
            id: row.try_get("id").map_err(read)?,
            user_id: row.try_get("user_id").map_err(read)?,
            token: row.try_get("token").map_err(read)?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(read)?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn insert(&self, token: NewRefreshToken) -> Result<RefreshToken, DomainError> {
        let result = sqlx::query(
            "INSERT INTO refresh_tokens (user_id, token, expires_at) VALUES (?, ?, ?)",
        )
        .bind(token.user_id)
        .bind(&token.token)
        .bind(token.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("Failed to insert refresh token", e))?;

        Ok(RefreshToken {
            id: result.last_insert_id() as i64,
            user_id: token.user_id,
            token: token.token,
            expires_at: token.expires_at,
        })
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let result = sqlx::query(
            "SELECT id, user_id, token, expires_at FROM refresh_tokens WHERE token = ? LIMIT 1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to find refresh token", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_expired_for_user(&self, user_id: i64) -> Result<u64, DomainError> {
        let result =
            sqlx::query("DELETE FROM refresh_tokens WHERE user_id = ? AND expires_at < ?")
                .bind(user_id)
                .bind(Utc::now())
                .execute(&self.pool)
                .await
                .map_err(|e| store_error("Failed to sweep expired refresh tokens", e))?;

        Ok(result.rows_affected())
    }
}
