//! Mapping from domain errors to HTTP responses.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use dh_core::errors::{AuthError, DomainError, TokenError};

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Convert a domain error into its HTTP response.
///
/// Store and internal failures are logged with detail here and rendered as
/// an opaque 500; everything else maps one-to-one onto the error taxonomy.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation(e) => {
            ErrorResponse::new("VALIDATION_ERROR", e.to_string())
                .to_response(StatusCode::BAD_REQUEST)
        }

        DomainError::Auth(AuthError::InvalidCredentials) => {
            ErrorResponse::new("INVALID_CREDENTIALS", error.to_string())
                .to_response(StatusCode::UNAUTHORIZED)
        }

        DomainError::Auth(AuthError::DuplicateCredential) => {
            ErrorResponse::new("DUPLICATE_CREDENTIAL", error.to_string())
                .to_response(StatusCode::BAD_REQUEST)
        }

        DomainError::Auth(AuthError::InvalidRefreshToken) => {
            ErrorResponse::new("INVALID_REFRESH_TOKEN", error.to_string())
                .to_response(StatusCode::FORBIDDEN)
        }

        DomainError::Auth(AuthError::ExpiredRefreshToken) => {
            ErrorResponse::new("EXPIRED_REFRESH_TOKEN", error.to_string())
                .to_response(StatusCode::FORBIDDEN)
        }

        DomainError::Token(TokenError::TokenExpired) => {
            ErrorResponse::new("TOKEN_EXPIRED", error.to_string())
                .to_response(StatusCode::FORBIDDEN)
        }

        DomainError::Token(_) => ErrorResponse::new("INVALID_TOKEN", "Invalid token")
            .to_response(StatusCode::FORBIDDEN),

        DomainError::NotFound { resource } => {
            ErrorResponse::new("NOT_FOUND", format!("{} not found", resource))
                .to_response(StatusCode::NOT_FOUND)
        }

        DomainError::Store { message } | DomainError::Internal { message } => {
            log::error!("internal error: {}", message);
            ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
