//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Claims structure for access token payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Display name
    pub name: String,

    /// Normalized email
    pub email: String,

    /// Role reference, if assigned
    pub role: Option<i64>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates access token claims for a user, expiring `ttl_seconds` from
    /// now.
    pub fn new_access(user: &User, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: user.id.to_string(),
            name: user.display_name(),
            email: user.email.clone(),
            role: user.role_id,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<i64, std::num::ParseIntError> {
        self.sub.parse()
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Claims structure for refresh token payloads.
///
/// Deliberately minimal: a refresh token only proves "this user may mint a
/// new access token", so it carries no profile attributes that could go
/// stale over its two-week lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl RefreshClaims {
    /// Creates refresh token claims expiring `ttl_seconds` from now.
    pub fn new(user_id: i64, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<i64, std::num::ParseIntError> {
        self.sub.parse()
    }
}

/// Refresh token row persisted in the `refresh_tokens` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the row
    pub id: i64,

    /// User ID this token belongs to
    pub user_id: i64,

    /// The token string as issued to the client
    pub token: String,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Fields required to insert a new refresh token row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRefreshToken {
    pub user_id: i64,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl NewRefreshToken {
    /// Creates a new refresh token row expiring `ttl_seconds` from now.
    pub fn new(user_id: i64, token: String, ttl_seconds: i64) -> Self {
        Self {
            user_id,
            token,
            expires_at: Utc::now() + Duration::seconds(ttl_seconds),
        }
    }
}
