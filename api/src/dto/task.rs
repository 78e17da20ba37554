//! Task request DTOs.

use serde::{Deserialize, Serialize};

use dh_core::domain::entities::task::{NewTask, TaskPriority, TaskStatus};

/// Body for `POST /tasks`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub priority: TaskPriority,

    #[serde(default)]
    pub status: TaskStatus,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(request: CreateTaskRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            priority: request.priority,
            status: request.status,
        }
    }
}

/// Body for `PUT /tasks/{id}`: full replacement of the mutable fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceTaskRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub priority: TaskPriority,

    #[serde(default)]
    pub status: TaskStatus,
}
