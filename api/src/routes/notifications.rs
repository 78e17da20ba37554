//! Notification route handlers.

use actix_web::{web, HttpResponse};

use crate::handlers::domain_error_response;
use crate::routes::{invalid_id_response, parse_id};
use crate::state::AppState;

/// `GET /notifications` (protected)
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    match state.notifications.list_all().await {
        Ok(notifications) => HttpResponse::Ok().json(notifications),
        Err(error) => domain_error_response(&error),
    }
}

/// `GET /notifications/{id}` (protected): notifications for one user,
/// newest first.
pub async fn list_for_user(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Some(user_id) = parse_id(&path) else {
        return invalid_id_response();
    };

    match state.notifications.list_for_user(user_id).await {
        Ok(notifications) => HttpResponse::Ok().json(notifications),
        Err(error) => domain_error_response(&error),
    }
}
