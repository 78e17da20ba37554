//! Meta lookup route handler.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use dh_core::domain::entities::meta::{Position, Role, UserRef};

use crate::handlers::domain_error_response;
use crate::state::AppState;

/// Bundle of lookup data for form dropdowns
#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub positions: Vec<Position>,
    pub roles: Vec<Role>,
    pub users: Vec<UserRef>,
}

/// `GET /api/meta` (protected)
pub async fn get_meta(state: web::Data<AppState>) -> HttpResponse {
    let positions = match state.meta.positions().await {
        Ok(positions) => positions,
        Err(error) => return domain_error_response(&error),
    };

    let roles = match state.meta.roles().await {
        Ok(roles) => roles,
        Err(error) => return domain_error_response(&error),
    };

    let users = match state.meta.users().await {
        Ok(users) => users,
        Err(error) => return domain_error_response(&error),
    };

    HttpResponse::Ok().json(MetaResponse {
        positions,
        roles,
        users,
    })
}
