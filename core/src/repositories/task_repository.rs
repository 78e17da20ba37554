//! Task repository trait.

use async_trait::async_trait;

use crate::domain::entities::task::{NewTask, Task, TaskChanges, TaskPriority, TaskStatus};
use crate::errors::DomainError;

/// Repository trait for task persistence
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List all tasks, newest first.
    async fn list(&self) -> Result<Vec<Task>, DomainError>;

    /// Find a task by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, DomainError>;

    /// Insert a new task.
    async fn create(&self, task: NewTask) -> Result<Task, DomainError>;

    /// Apply a partial update; `Ok(None)` when the task does not exist.
    async fn patch(&self, id: i64, changes: TaskChanges) -> Result<Option<Task>, DomainError>;

    /// Replace every mutable field; `Ok(None)` when the task does not exist.
    async fn replace(
        &self,
        id: i64,
        title: String,
        description: String,
        priority: TaskPriority,
        status: TaskStatus,
    ) -> Result<Option<Task>, DomainError>;

    /// Delete a task; `Ok(false)` when the task does not exist.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
