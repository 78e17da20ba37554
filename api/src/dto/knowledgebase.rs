//! Knowledgebase request DTOs.

use serde::{Deserialize, Serialize};

use dh_core::domain::entities::knowledgebase::NewKbArticle;

/// Body for `POST /knowledgebase`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateKbRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,
}

impl From<CreateKbRequest> for NewKbArticle {
    fn from(request: CreateKbRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
        }
    }
}

/// Body for `PUT /knowledgebase/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceKbRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,
}
