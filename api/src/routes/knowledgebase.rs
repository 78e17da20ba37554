//! Knowledgebase route handlers.
//!
//! The batch listing sets `X-Total-Count` so list clients can paginate;
//! mutations publish change events to the WebSocket feed.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use dh_core::domain::entities::knowledgebase::KbChanges;
use dh_core::errors::DomainError;
use dh_shared::types::{ListRange, TOTAL_COUNT_HEADER};

use crate::dto::knowledgebase::{CreateKbRequest, ReplaceKbRequest};
use crate::dto::user::{DeletedResponse, TotalResponse};
use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::domain_error_response;
use crate::realtime::ChangeEvent;
use crate::routes::{invalid_id_response, parse_id};
use crate::state::AppState;

/// `GET /knowledgebase/total` (protected)
pub async fn total(state: web::Data<AppState>) -> HttpResponse {
    match state.knowledgebase.count().await {
        Ok(total) => HttpResponse::Ok().json(TotalResponse { total }),
        Err(error) => domain_error_response(&error),
    }
}

/// `GET /knowledgebase` (protected): `_start`/`_limit` batch listing.
pub async fn list(state: web::Data<AppState>, range: web::Query<ListRange>) -> HttpResponse {
    let articles = match state.knowledgebase.list(range.into_inner()).await {
        Ok(articles) => articles,
        Err(error) => return domain_error_response(&error),
    };

    let total = match state.knowledgebase.count().await {
        Ok(total) => total,
        Err(error) => return domain_error_response(&error),
    };

    HttpResponse::Ok()
        .insert_header((TOTAL_COUNT_HEADER, total))
        .json(articles)
}

/// `POST /knowledgebase`
pub async fn create(
    state: web::Data<AppState>,
    request: web::Json<CreateKbRequest>,
) -> HttpResponse {
    if request.title.trim().is_empty() {
        return ErrorResponse::new("VALIDATION_ERROR", "Title is required")
            .to_response(StatusCode::BAD_REQUEST);
    }

    match state.knowledgebase.create(request.into_inner().into()).await {
        Ok(article) => {
            state.events.publish(ChangeEvent::KbUpdated {
                article: article.clone(),
            });
            HttpResponse::Created().json(article)
        }
        Err(error) => domain_error_response(&error),
    }
}

/// `PATCH /knowledgebase/{id}`
pub async fn patch(
    state: web::Data<AppState>,
    path: web::Path<String>,
    changes: web::Json<KbChanges>,
) -> HttpResponse {
    let Some(id) = parse_id(&path) else {
        return invalid_id_response();
    };

    let changes = changes.into_inner();
    if changes.is_empty() {
        return ErrorResponse::new("VALIDATION_ERROR", "No fields provided")
            .to_response(StatusCode::BAD_REQUEST);
    }

    match state.knowledgebase.patch(id, changes).await {
        Ok(Some(article)) => {
            state.events.publish(ChangeEvent::KbUpdated {
                article: article.clone(),
            });
            HttpResponse::Ok().json(article)
        }
        Ok(None) => domain_error_response(&DomainError::not_found("Article")),
        Err(error) => domain_error_response(&error),
    }
}

/// `PUT /knowledgebase/{id}`
pub async fn replace(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<ReplaceKbRequest>,
) -> HttpResponse {
    let Some(id) = parse_id(&path) else {
        return invalid_id_response();
    };

    let request = request.into_inner();
    if request.title.trim().is_empty() {
        return ErrorResponse::new("VALIDATION_ERROR", "Title is required")
            .to_response(StatusCode::BAD_REQUEST);
    }

    match state
        .knowledgebase
        .replace(id, request.title, request.description)
        .await
    {
        Ok(Some(article)) => {
            state.events.publish(ChangeEvent::KbUpdated {
                article: article.clone(),
            });
            HttpResponse::Ok().json(article)
        }
        Ok(None) => domain_error_response(&DomainError::not_found("Article")),
        Err(error) => domain_error_response(&error),
    }
}

/// `DELETE /knowledgebase/{id}`
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Some(id) = parse_id(&path) else {
        return invalid_id_response();
    };

    match state.knowledgebase.delete(id).await {
        Ok(true) => {
            state.events.publish(ChangeEvent::KbDeleted { id });
            HttpResponse::Ok().json(DeletedResponse {
                message: "Article deleted".to_string(),
                id,
            })
        }
        Ok(false) => domain_error_response(&DomainError::not_found("Article")),
        Err(error) => domain_error_response(&error),
    }
}
