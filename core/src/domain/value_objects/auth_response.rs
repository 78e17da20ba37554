//! Authentication result value objects.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::PublicUser;

/// Result of a successful registration.
///
/// Registration issues an access token immediately so a fresh account can
/// start calling protected endpoints without a separate login round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    /// JWT access token
    pub token: String,

    /// Client-safe view of the created user
    pub user: PublicUser,
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Persisted refresh token for minting new access tokens
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    /// Client-safe view of the authenticated user
    pub user: PublicUser,
}
