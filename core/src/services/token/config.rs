//! Token service configuration.

use dh_shared::config::JwtConfig;

/// Configuration for [`super::TokenService`]
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Secret for signing and verifying access tokens
    pub access_secret: String,

    /// Secret for signing and verifying refresh tokens.
    /// Distinct from the access secret so one leak cannot forge the other
    /// token kind.
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    pub access_ttl_seconds: i64,

    /// Refresh token lifetime in seconds
    pub refresh_ttl_seconds: i64,
}

impl From<&JwtConfig> for TokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            access_secret: config.access_secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            access_ttl_seconds: config.access_token_expiry,
            refresh_ttl_seconds: config.refresh_token_expiry,
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}
