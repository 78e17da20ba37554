//! Handler for `POST /auth/register`.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use validator::Validate;

use dh_core::services::auth::NewRegistration;

use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::domain_error_response;
use crate::state::AppState;

/// Create an account and return an access token for it.
///
/// # Responses
/// - 201: `{token, user}`
/// - 400: missing/malformed fields, or email already registered
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    if request.validate().is_err() {
        return ErrorResponse::new("VALIDATION_ERROR", "Email and password are required")
            .to_response(StatusCode::BAD_REQUEST);
    }

    let request = request.into_inner();
    let registration = NewRegistration {
        firstname: request.firstname,
        lastname: request.lastname,
        email: request.email,
        password: request.password,
        role_id: request.role_id,
        position_id: request.position_id,
    };

    match state.auth_service.register(registration).await {
        Ok(registered) => HttpResponse::Created().json(RegisterResponse {
            token: registered.token,
            user: registered.user,
        }),
        Err(error) => domain_error_response(&error),
    }
}
