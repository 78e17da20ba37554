//! Token issuance and verification over `jsonwebtoken`.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, RefreshClaims};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// Issues and verifies the two token kinds.
///
/// Pure over (token, clock, secret): nothing here touches the store. The
/// access and refresh secrets are distinct; a refresh token presented to
/// `verify_access_token` fails signature verification and vice versa.
pub struct TokenService {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    validation: Validation,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
}

impl TokenService {
    /// Creates a new token service instance.
    pub fn new(config: TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No clock skew allowance: a token expiring "now" is expired.
        validation.leeway = 0;

        Self {
            access_encoding: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation,
            access_ttl_seconds: config.access_ttl_seconds,
            refresh_ttl_seconds: config.refresh_ttl_seconds,
        }
    }

    /// Access token lifetime in seconds.
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }

    /// Refresh token lifetime in seconds.
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_seconds
    }

    /// Issues an access token for a user with the configured lifetime.
    pub fn issue_access_token(&self, user: &User) -> Result<String, DomainError> {
        self.issue_access_token_with_ttl(user, self.access_ttl_seconds)
    }

    /// Issues an access token with an explicit lifetime.
    ///
    /// The configured lifetime is the normal path; an explicit ttl exists
    /// for callers exercising expiry behavior.
    pub fn issue_access_token_with_ttl(
        &self,
        user: &User,
        ttl_seconds: i64,
    ) -> Result<String, DomainError> {
        let claims = Claims::new_access(user, ttl_seconds);
        encode(&Header::default(), &claims, &self.access_encoding)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Issues a refresh token for a user id with the configured lifetime.
    pub fn issue_refresh_token(&self, user_id: i64) -> Result<String, DomainError> {
        let claims = RefreshClaims::new(user_id, self.refresh_ttl_seconds);
        encode(&Header::default(), &claims, &self.refresh_encoding)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token and returns its claims.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature and expiry are valid
    /// * `Err(TokenError::TokenExpired)` - Signature valid, expiry passed
    /// * `Err(TokenError::TokenInvalid)` - Signature verification failed
    /// * `Err(TokenError::TokenMalformed)` - Not structurally a JWT
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.access_decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(map_decode_error)
    }

    /// Verifies a refresh token and returns its claims.
    pub fn verify_refresh_token(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        decode::<RefreshClaims>(token, &self.refresh_decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(map_decode_error)
    }
}

/// Maps `jsonwebtoken` decode failures onto the domain taxonomy.
///
/// The `TokenExpired` / `TokenInvalid` split matters: callers route expired
/// tokens to the refresh flow and everything else back to login.
fn map_decode_error(error: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::InvalidSignature => TokenError::TokenInvalid,
        ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => TokenError::TokenMalformed,
        _ => TokenError::TokenInvalid,
    }
}
