//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Development fallback for the access-token secret.
pub const DEV_ACCESS_SECRET: &str = "supersecretkey";

/// Development fallback for the refresh-token secret.
pub const DEV_REFRESH_SECRET: &str = "superrefreshsecretkey";

/// JWT signing configuration
///
/// Access and refresh tokens are signed with distinct secrets so a leaked
/// refresh secret cannot be used to forge access tokens (and vice versa).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret for signing access tokens
    pub access_secret: String,

    /// Secret for signing refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from(DEV_ACCESS_SECRET),
            refresh_secret: String::from(DEV_REFRESH_SECRET),
            access_token_expiry: 12 * 3600,          // 12 hours
            refresh_token_expiry: 14 * 24 * 3600,    // 14 days
        }
    }
}

impl JwtConfig {
    /// Build from `JWT_SECRET` / `REFRESH_SECRET` environment variables,
    /// falling back to the development defaults when unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_secret: std::env::var("JWT_SECRET")
                .unwrap_or(defaults.access_secret),
            refresh_secret: std::env::var("REFRESH_SECRET")
                .unwrap_or(defaults.refresh_secret),
            access_token_expiry: std::env::var("ACCESS_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry),
            refresh_token_expiry: std::env::var("REFRESH_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry),
        }
    }

    /// True when either secret is still a development fallback.
    ///
    /// Callers must log a warning at startup when this returns true; the
    /// fallbacks exist so a fresh checkout runs, not for deployment.
    pub fn is_using_default_secret(&self) -> bool {
        self.access_secret == DEV_ACCESS_SECRET || self.refresh_secret == DEV_REFRESH_SECRET
    }

    /// Set access token expiry in hours
    pub fn with_access_expiry_hours(mut self, hours: i64) -> Self {
        self.access_token_expiry = hours * 3600;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct HashConfig {
    /// bcrypt cost factor
    pub cost: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self { cost: 10 }
    }
}

impl HashConfig {
    /// Build from the `BCRYPT_COST` environment variable.
    pub fn from_env() -> Self {
        let cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::default().cost);
        Self { cost }
    }
}
