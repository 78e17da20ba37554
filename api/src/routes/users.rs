//! User management route handlers.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use validator::Validate;

use dh_core::domain::entities::user::{NewUser, UserChanges};
use dh_core::errors::DomainError;
use dh_shared::validation::normalize_email;
use dh_shared::ListRange;

use crate::dto::auth::{RefreshResponse, RefreshTokenRequest};
use crate::dto::user::{CreateUserRequest, DeletedResponse, TotalResponse};
use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::domain_error_response;
use crate::routes::{invalid_id_response, parse_id};
use crate::state::AppState;

/// `GET /users/total`
pub async fn total(state: web::Data<AppState>) -> HttpResponse {
    match state.users.count().await {
        Ok(total) => HttpResponse::Ok().json(TotalResponse { total }),
        Err(error) => domain_error_response(&error),
    }
}

/// `GET /users` (protected): paginated listing joined with role and
/// position names.
pub async fn list(state: web::Data<AppState>, range: web::Query<ListRange>) -> HttpResponse {
    match state.users.list(range.into_inner()).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(error) => domain_error_response(&error),
    }
}

/// `GET /users/{id}`
pub async fn get_by_id(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Some(id) = parse_id(&path) else {
        return invalid_id_response();
    };

    match state.users.find_by_id(id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user.to_public()),
        Ok(None) => domain_error_response(&DomainError::not_found("User")),
        Err(error) => domain_error_response(&error),
    }
}

/// `POST /users`: admin-style account creation.
///
/// Unlike `/auth/register` this requires role and position assignments and
/// returns no token; the created user logs in on their own.
pub async fn create(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse {
    if request.validate().is_err() {
        return ErrorResponse::new(
            "VALIDATION_ERROR",
            "Missing required fields (firstname, lastname, email, password, position_id, role_id)",
        )
        .to_response(StatusCode::BAD_REQUEST);
    }

    let request = request.into_inner();

    let password_hash = match state.auth_service.hash_password(&request.password) {
        Ok(hash) => hash,
        Err(error) => return domain_error_response(&error),
    };

    let new_user = NewUser {
        firstname: request.firstname,
        lastname: request.lastname,
        email: normalize_email(&request.email),
        password_hash,
        role_id: Some(request.role_id),
        position_id: Some(request.position_id),
    };

    match state.users.create(new_user).await {
        Ok(user) => HttpResponse::Created().json(user.to_public()),
        Err(error) => domain_error_response(&error),
    }
}

/// `PATCH /users/{id}`: partial update over the enumerated fields.
pub async fn patch(
    state: web::Data<AppState>,
    path: web::Path<String>,
    changes: web::Json<UserChanges>,
) -> HttpResponse {
    let Some(id) = parse_id(&path) else {
        return invalid_id_response();
    };

    match state.users.update(id, changes.into_inner()).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user.to_public()),
        Ok(None) => domain_error_response(&DomainError::not_found("User")),
        Err(error) => domain_error_response(&error),
    }
}

/// `DELETE /users/{id}`
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Some(id) = parse_id(&path) else {
        return invalid_id_response();
    };

    match state.users.delete(id).await {
        Ok(true) => HttpResponse::Ok().json(DeletedResponse {
            message: "User deleted successfully".to_string(),
            id,
        }),
        Ok(false) => domain_error_response(&DomainError::not_found("User")),
        Err(error) => domain_error_response(&error),
    }
}

/// `POST /users/refresh`: mint a new access token from a refresh token.
///
/// # Responses
/// - 200: `{accessToken}`
/// - 401: token missing from the body
/// - 403: token unknown, expired, or unverifiable
pub async fn refresh(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse {
    if request.token.is_empty() {
        return ErrorResponse::new("MISSING_TOKEN", "Missing refresh token")
            .to_response(StatusCode::UNAUTHORIZED);
    }

    match state.auth_service.refresh(&request.token).await {
        Ok(access_token) => HttpResponse::Ok().json(RefreshResponse { access_token }),
        Err(error) => domain_error_response(&error),
    }
}
