//! Auth request and response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use dh_core::domain::entities::user::PublicUser;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    pub firstname: String,

    #[serde(default)]
    pub lastname: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,

    #[serde(default)]
    pub role_id: Option<i64>,

    #[serde(default)]
    pub position_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub token: String,
}

/// 201 body for `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    pub user: PublicUser,
}

/// 200 body for `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: PublicUser,
}

/// 200 body for `POST /users/refresh`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}
