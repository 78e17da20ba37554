//! MySQL implementation of the MetaRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use dh_core::domain::entities::meta::{Position, Role, UserRef};
use dh_core::errors::DomainError;
use dh_core::repositories::MetaRepository;

use super::store_error;

/// MySQL implementation of MetaRepository over the lookup tables
pub struct MySqlMetaRepository {
    pool: MySqlPool,
}

impl MySqlMetaRepository {
    /// Create a new MySQL meta repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MetaRepository for MySqlMetaRepository {
    async fn roles(&self) -> Result<Vec<Role>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM user_role ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list roles", e))?;

        rows.iter()
            .map(|row| {
                let read = |e: sqlx::Error| DomainError::Internal {
                    message: format!("Failed to read role row: {}", e),
                };
                Ok(Role {
                    id: row.try_get("id").map_err(read)?,
                    name: row.try_get("name").map_err(read)?,
                })
            })
            .collect()
    }

    async fn positions(&self) -> Result<Vec<Position>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM user_position ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list positions", e))?;

        rows.iter()
            .map(|row| {
                let read = |e: sqlx::Error| DomainError::Internal {
                    message: format!("Failed to read position row: {}", e),
                };
                Ok(Position {
                    id: row.try_get("id").map_err(read)?,
                    name: row.try_get("name").map_err(read)?,
                })
            })
            .collect()
    }

    async fn users(&self) -> Result<Vec<UserRef>, DomainError> {
        let rows =
            sqlx::query("SELECT id, firstname, lastname FROM users ORDER BY firstname ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| store_error("Failed to list user references", e))?;

        rows.iter()
            .map(|row| {
                let read = |e: sqlx::Error| DomainError::Internal {
                    message: format!("Failed to read user reference row: {}", e),
                };
                Ok(UserRef {
                    id: row.try_get("id").map_err(read)?,
                    firstname: row.try_get("firstname").map_err(read)?,
                    lastname: row.try_get("lastname").map_err(read)?,
                })
            })
            .collect()
    }
}
