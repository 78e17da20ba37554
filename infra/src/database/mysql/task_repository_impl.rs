//! MySQL implementation of the TaskRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use dh_core::domain::entities::task::{NewTask, Task, TaskChanges, TaskPriority, TaskStatus};
use dh_core::errors::DomainError;
use dh_core::repositories::TaskRepository;

use super::store_error;

const TASK_COLUMNS: &str = "id, title, description, priority, status, created_at, updated_at";

/// MySQL implementation of TaskRepository
pub struct MySqlTaskRepository {
    pool: MySqlPool,
}

impl MySqlTaskRepository {
    /// Create a new MySQL task repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_task(row: &sqlx::mysql::MySqlRow) -> Result<Task, DomainError> {
        let read = |e: sqlx::Error| DomainError::Internal {
            message: format!("Failed to read task row: {}", e),
        };

        let priority: String = row.try_get("priority").map_err(read)?;
        let status: String = row.try_get("status").map_err(read)?;

        Ok(Task {
            id: row.try_get("id").map_err(read)?,
            title: row.try_get("title").map_err(read)?,
            description: row.try_get("description").map_err(read)?,
            priority: TaskPriority::parse(&priority),
            status: TaskStatus::parse(&status),
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(read)?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(read)?,
        })
    }
}

#[async_trait]
impl TaskRepository for MySqlTaskRepository {
    async fn list(&self) -> Result<Vec<Task>, DomainError> {
        let query = format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at DESC");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list tasks", e))?;

        rows.iter().map(Self::row_to_task).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, DomainError> {
        let query = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to find task", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, task: NewTask) -> Result<Task, DomainError> {
        let query = r#"
            INSERT INTO tasks (title, description, priority, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, NOW(), NOW())
        "#;

        let result = sqlx::query(query)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.priority.as_str())
            .bind(task.status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to create task", e))?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id).await?.ok_or(DomainError::Internal {
            message: "Created task row not found".to_string(),
        })
    }

    async fn patch(&self, id: i64, changes: TaskChanges) -> Result<Option<Task>, DomainError> {
        let existing = match self.find_by_id(id).await? {
            Some(task) => task,
            None => return Ok(None),
        };

        let title = changes.title.unwrap_or(existing.title);
        let description = changes.description.unwrap_or(existing.description);
        let priority = changes.priority.unwrap_or(existing.priority);
        let status = changes.status.unwrap_or(existing.status);

        self.replace(id, title, description, priority, status).await
    }

    async fn replace(
        &self,
        id: i64,
        title: String,
        description: String,
        priority: TaskPriority,
        status: TaskStatus,
    ) -> Result<Option<Task>, DomainError> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let query = r#"
            UPDATE tasks
            SET title = ?, description = ?, priority = ?, status = ?, updated_at = NOW()
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&title)
            .bind(&description)
            .bind(priority.as_str())
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to update task", e))?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to delete task", e))?;

        Ok(result.rows_affected() > 0)
    }
}
