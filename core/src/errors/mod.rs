//! Domain-specific error types and error handling.
//!
//! Presentation concerns (HTTP status codes, response bodies) live in the
//! api crate; these types only classify what went wrong.

use thiserror::Error;

/// Authentication and session lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Covers both "no such user" and "wrong password". The single variant
    /// is the anti-enumeration contract: callers cannot tell which one
    /// happened.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered")]
    DuplicateCredential,

    /// Presented refresh token has no row in the store.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Refresh token row exists but the token is past expiry or fails
    /// signature verification.
    #[error("Expired or invalid refresh token")]
    ExpiredRefreshToken,
}

/// Token verification and issuance errors
///
/// `TokenExpired` is deliberately distinct from `TokenInvalid`: an expired
/// access token sends the client to the refresh flow, a bad signature sends
/// it back to login.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Token is structurally invalid")]
    TokenMalformed,

    #[error("Token signature verification failed")]
    TokenInvalid,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors, checked before any store access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid ID")]
    InvalidId,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Any underlying store failure. The message is for server logs only
    /// and must never reach a client.
    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    /// Shorthand for a not-found error on a named resource.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a required-field validation error.
    pub fn required(field: impl Into<String>) -> Self {
        Self::Validation(ValidationError::RequiredField {
            field: field.into(),
        })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
