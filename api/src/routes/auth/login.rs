//! Handler for `POST /auth/login`.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::domain_error_response;
use crate::state::AppState;

/// Authenticate and return an access/refresh token pair.
///
/// # Responses
/// - 200: `{message, accessToken, refreshToken, expiresIn, user}`
/// - 400: missing fields
/// - 401: bad credentials (same body for unknown email and wrong password)
pub async fn login(state: web::Data<AppState>, request: web::Json<LoginRequest>) -> HttpResponse {
    if request.validate().is_err() {
        return ErrorResponse::new("VALIDATION_ERROR", "Email and password are required")
            .to_response(StatusCode::BAD_REQUEST);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(auth) => HttpResponse::Ok().json(LoginResponse {
            message: "Login successful".to_string(),
            access_token: auth.access_token,
            refresh_token: auth.refresh_token,
            expires_in: auth.expires_in,
            user: auth.user,
        }),
        Err(error) => domain_error_response(&error),
    }
}
