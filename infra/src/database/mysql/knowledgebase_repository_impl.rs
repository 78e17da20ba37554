//! MySQL implementation of the KnowledgebaseRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use dh_core::domain::entities::knowledgebase::{KbArticle, KbChanges, NewKbArticle};
use dh_core::errors::DomainError;
use dh_core::repositories::KnowledgebaseRepository;
use dh_shared::ListRange;

use super::store_error;

const KB_COLUMNS: &str = "id, title, description, created_at, updated_at";

/// MySQL implementation of KnowledgebaseRepository
pub struct MySqlKnowledgebaseRepository {
    pool: MySqlPool,
}

impl MySqlKnowledgebaseRepository {
    /// Create a new MySQL knowledgebase repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_article(row: &sqlx::mysql::MySqlRow) -> Result<KbArticle, DomainError> {
        let read = |e: sqlx::Error| DomainError::Internal {
            message: format!("Failed to read knowledgebase row: {}", e),
        };

        Ok(KbArticle {
            id: row.try_get("id").map_err(read)?,
            title: row.try_get("title").map_err(read)?,
            description: row.try_get("description").map_err(read)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(read)?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(read)?,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<KbArticle>, DomainError> {
        let query = format!("SELECT {KB_COLUMNS} FROM knowledgebase WHERE id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to find knowledgebase article", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_article(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl KnowledgebaseRepository for MySqlKnowledgebaseRepository {
    async fn list(&self, range: ListRange) -> Result<Vec<KbArticle>, DomainError> {
        let range = range.clamped();
        let query = format!(
            "SELECT {KB_COLUMNS} FROM knowledgebase ORDER BY created_at DESC LIMIT ? OFFSET ?"
        );

        let rows = sqlx::query(&query)
            .bind(range.limit)
            .bind(range.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list knowledgebase articles", e))?;

        rows.iter().map(Self::row_to_article).collect()
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM knowledgebase")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| store_error("Failed to count knowledgebase articles", e))?;

        row.try_get("total").map_err(|e| DomainError::Internal {
            message: format!("Failed to read knowledgebase count: {}", e),
        })
    }

    async fn create(&self, article: NewKbArticle) -> Result<KbArticle, DomainError> {
        let query = r#"
            INSERT INTO knowledgebase (title, description, created_at, updated_at)
            VALUES (?, ?, NOW(), NOW())
        "#;

        let result = sqlx::query(query)
            .bind(&article.title)
            .bind(&article.description)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to create knowledgebase article", e))?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id).await?.ok_or(DomainError::Internal {
            message: "Created knowledgebase row not found".to_string(),
        })
    }

    async fn patch(&self, id: i64, changes: KbChanges) -> Result<Option<KbArticle>, DomainError> {
        let existing = match self.find_by_id(id).await? {
            Some(article) => article,
            None => return Ok(None),
        };

        let title = changes.title.unwrap_or(existing.title);
        let description = changes.description.unwrap_or(existing.description);

        self.replace(id, title, description).await
    }

    async fn replace(
        &self,
        id: i64,
        title: String,
        description: String,
    ) -> Result<Option<KbArticle>, DomainError> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let query = r#"
            UPDATE knowledgebase
            SET title = ?, description = ?, updated_at = NOW()
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&title)
            .bind(&description)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to update knowledgebase article", e))?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM knowledgebase WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to delete knowledgebase article", e))?;

        Ok(result.rows_affected() > 0)
    }
}
