//! Knowledgebase article entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article as stored in the `knowledgebase` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KbArticle {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting a new article
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewKbArticle {
    pub title: String,
    pub description: String,
}

/// Partial update with enumerated allowed fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KbChanges {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl KbChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}
