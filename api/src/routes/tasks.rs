//! Task route handlers.
//!
//! Every successful mutation publishes a change event so connected
//! WebSocket clients converge without polling.

use actix_web::{web, HttpResponse};

use dh_core::domain::entities::task::TaskChanges;
use dh_core::errors::DomainError;

use crate::dto::task::{CreateTaskRequest, ReplaceTaskRequest};
use crate::dto::user::DeletedResponse;
use crate::handlers::domain_error_response;
use crate::realtime::ChangeEvent;
use crate::routes::{invalid_id_response, parse_id};
use crate::state::AppState;

/// `GET /tasks`
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    match state.tasks.list().await {
        Ok(tasks) => HttpResponse::Ok().json(tasks),
        Err(error) => domain_error_response(&error),
    }
}

/// `POST /tasks`
pub async fn create(
    state: web::Data<AppState>,
    request: web::Json<CreateTaskRequest>,
) -> HttpResponse {
    match state.tasks.create(request.into_inner().into()).await {
        Ok(task) => {
            state
                .events
                .publish(ChangeEvent::TaskUpdated { task: task.clone() });
            HttpResponse::Created().json(task)
        }
        Err(error) => domain_error_response(&error),
    }
}

/// `PATCH /tasks/{id}`
pub async fn patch(
    state: web::Data<AppState>,
    path: web::Path<String>,
    changes: web::Json<TaskChanges>,
) -> HttpResponse {
    let Some(id) = parse_id(&path) else {
        return invalid_id_response();
    };

    match state.tasks.patch(id, changes.into_inner()).await {
        Ok(Some(task)) => {
            state
                .events
                .publish(ChangeEvent::TaskUpdated { task: task.clone() });
            HttpResponse::Ok().json(task)
        }
        Ok(None) => domain_error_response(&DomainError::not_found("Task")),
        Err(error) => domain_error_response(&error),
    }
}

/// `PUT /tasks/{id}`
pub async fn replace(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<ReplaceTaskRequest>,
) -> HttpResponse {
    let Some(id) = parse_id(&path) else {
        return invalid_id_response();
    };

    let request = request.into_inner();
    match state
        .tasks
        .replace(
            id,
            request.title,
            request.description,
            request.priority,
            request.status,
        )
        .await
    {
        Ok(Some(task)) => {
            state
                .events
                .publish(ChangeEvent::TaskUpdated { task: task.clone() });
            HttpResponse::Ok().json(task)
        }
        Ok(None) => domain_error_response(&DomainError::not_found("Task")),
        Err(error) => domain_error_response(&error),
    }
}

/// `DELETE /tasks/{id}`
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Some(id) = parse_id(&path) else {
        return invalid_id_response();
    };

    match state.tasks.delete(id).await {
        Ok(true) => {
            state.events.publish(ChangeEvent::TaskDeleted { id });
            HttpResponse::Ok().json(DeletedResponse {
                message: "Task deleted".to_string(),
                id,
            })
        }
        Ok(false) => domain_error_response(&DomainError::not_found("Task")),
        Err(error) => domain_error_response(&error),
    }
}
