//! Route handlers grouped by resource.

pub mod auth;
pub mod knowledgebase;
pub mod meta;
pub mod notifications;
pub mod tasks;
pub mod users;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Parse a path id, or `None` for anything non-numeric.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// 400 response for unparseable path ids.
pub(crate) fn invalid_id_response() -> HttpResponse {
    ErrorResponse::new("INVALID_ID", "Invalid ID").to_response(StatusCode::BAD_REQUEST)
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("0"), Some(0));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("4.2"), None);
        assert_eq!(parse_id(""), None);
    }
}
