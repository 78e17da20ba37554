//! User management request DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body for `POST /users` (admin-style account creation)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1))]
    pub firstname: String,

    #[validate(length(min = 1))]
    pub lastname: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,

    pub role_id: i64,

    pub position_id: i64,
}

/// 200 body for `DELETE /users/{id}` and friends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub message: String,
    pub id: i64,
}

/// 200 body for `GET /users/total`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalResponse {
    pub total: i64,
}
