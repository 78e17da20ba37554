//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use dh_core::domain::entities::user::{NewUser, User, UserChanges, UserSummary};
use dh_core::errors::{AuthError, DomainError};
use dh_core::repositories::UserRepository;
use dh_shared::ListRange;

use super::store_error;

const USER_COLUMNS: &str =
    "id, firstname, lastname, email, password, role_id, position_id, status, profile_image, created_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity.
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let read = |e: sqlx::Error| DomainError::Internal {
            message: format!("Failed to read user row: {}", e),
        };

        Ok(User {
            id: row.try_get("id").map_err(read)?,
            firstname: row.try_get("firstname").map_err(read)?,
            lastname: row.try_get("lastname").map_err(read)?,
            email: row.try_get("email").map_err(read)?,
            password_hash: row.try_get("password").map_err(read)?,
            role_id: row.try_get("role_id").map_err(read)?,
            position_id: row.try_get("position_id").map_err(read)?,
            status: row.try_get("status").map_err(read)?,
            profile_image: row.try_get("profile_image").map_err(read)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(read)?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to find user by email", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to find user by id", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (firstname, lastname, email, password, role_id, position_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?, NOW())
        "#;

        // Insert and catch the unique-constraint violation: the constraint
        // on `email` is the single source of truth for duplicates, so two
        // concurrent registrations cannot both pass a pre-check.
        let result = sqlx::query(query)
            .bind(&user.firstname)
            .bind(&user.lastname)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role_id)
            .bind(user.position_id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    DomainError::Auth(AuthError::DuplicateCredential)
                }
                _ => store_error("Failed to create user", e),
            })?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id).await?.ok_or(DomainError::Internal {
            message: "Created user row not found".to_string(),
        })
    }

    async fn list(&self, range: ListRange) -> Result<Vec<UserSummary>, DomainError> {
        let range = range.clamped();
        let query = r#"
            SELECT u.id, u.firstname, u.lastname,
                   r.name AS role, r.id AS role_id,
                   p.name AS position, p.id AS position_id
            FROM users AS u
            JOIN user_role AS r ON u.role_id = r.id
            JOIN user_position AS p ON u.position_id = p.id
            ORDER BY u.id DESC
            LIMIT ? OFFSET ?
        "#;

        let rows = sqlx::query(query)
            .bind(range.limit)
            .bind(range.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list users", e))?;

        let mut summaries = Vec::with_capacity(rows.len());
        for row in rows {
            let read = |e: sqlx::Error| DomainError::Internal {
                message: format!("Failed to read user summary row: {}", e),
            };
            summaries.push(UserSummary {
                id: row.try_get("id").map_err(read)?,
                firstname: row.try_get("firstname").map_err(read)?,
                lastname: row.try_get("lastname").map_err(read)?,
                role: row.try_get("role").map_err(read)?,
                role_id: row.try_get("role_id").map_err(read)?,
                position: row.try_get("position").map_err(read)?,
                position_id: row.try_get("position_id").map_err(read)?,
            });
        }

        Ok(summaries)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| store_error("Failed to count users", e))?;

        row.try_get("total").map_err(|e| DomainError::Internal {
            message: format!("Failed to read user count: {}", e),
        })
    }

    async fn update(&self, id: i64, changes: UserChanges) -> Result<Option<User>, DomainError> {
        let existing = match self.find_by_id(id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        // Merge onto the existing row so unspecified fields keep their
        // values; only the enumerated columns are ever written.
        let firstname = changes.firstname.unwrap_or(existing.firstname);
        let lastname = changes.lastname.unwrap_or(existing.lastname);
        let position_id = changes.position_id.or(existing.position_id);
        let role_id = changes.role_id.or(existing.role_id);
        let status = changes.status.or(existing.status);

        let query = r#"
            UPDATE users
            SET firstname = ?, lastname = ?, position_id = ?, role_id = ?, status = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&firstname)
            .bind(&lastname)
            .bind(position_id)
            .bind(role_id)
            .bind(&status)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to update user", e))?;

        self.find_by_id(id).await
    }

    async fn update_password_hash(
        &self,
        id: i64,
        password_hash: &str,
    ) -> Result<(), DomainError> {
        sqlx::query("UPDATE users SET password = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to update password hash", e))?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}
