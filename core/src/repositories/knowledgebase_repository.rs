//! Knowledgebase repository trait.

use async_trait::async_trait;

use dh_shared::ListRange;

use crate::domain::entities::knowledgebase::{KbArticle, KbChanges, NewKbArticle};
use crate::errors::DomainError;

/// Repository trait for knowledgebase article persistence
#[async_trait]
pub trait KnowledgebaseRepository: Send + Sync {
    /// List articles newest first within the given range.
    async fn list(&self, range: ListRange) -> Result<Vec<KbArticle>, DomainError>;

    /// Count all article rows.
    async fn count(&self) -> Result<i64, DomainError>;

    /// Insert a new article.
    async fn create(&self, article: NewKbArticle) -> Result<KbArticle, DomainError>;

    /// Apply a partial update; `Ok(None)` when the article does not exist.
    async fn patch(&self, id: i64, changes: KbChanges) -> Result<Option<KbArticle>, DomainError>;

    /// Replace title and description; `Ok(None)` when the article does not
    /// exist.
    async fn replace(
        &self,
        id: i64,
        title: String,
        description: String,
    ) -> Result<Option<KbArticle>, DomainError>;

    /// Delete an article; `Ok(false)` when the article does not exist.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
