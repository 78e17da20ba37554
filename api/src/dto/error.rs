//! Error response DTO.

use actix_web::http::StatusCode;

pub use dh_shared::types::ErrorResponse;

/// Extension trait rendering an [`ErrorResponse`] as an actix response.
///
/// The struct itself lives in `dh_shared`, which knows nothing about HTTP;
/// the status code pairing happens here at the boundary.
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(status).json(self)
    }
}
