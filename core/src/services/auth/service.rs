//! Main authentication service implementation.

use std::sync::Arc;

use dh_shared::validation::{is_valid_email, normalize_email};

use crate::domain::entities::audit::actions;
use crate::domain::entities::token::NewRefreshToken;
use crate::domain::entities::user::{NewUser, User};
use crate::domain::value_objects::{AuthenticatedUser, RegisteredUser};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::audit::AuditService;
use crate::services::password::{LegacyCredentialMigrator, PasswordHasher};
use crate::services::token::TokenService;

/// Registration input
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub role_id: Option<i64>,
    pub position_id: Option<i64>,
}

/// Coordinates the session lifecycle over the credential store, password
/// hasher, and token service.
///
/// Validation runs before any store access; store failures surface as
/// `DomainError::Store` and are never retried here (a retry could insert a
/// second refresh token row).
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenRepository>,
    token_service: Arc<TokenService>,
    audit: Arc<AuditService>,
    hasher: PasswordHasher,
    migrator: LegacyCredentialMigrator,
}

impl AuthService {
    /// Create a new authentication service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenRepository>,
        token_service: Arc<TokenService>,
        audit: Arc<AuditService>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            tokens,
            token_service,
            audit,
            hasher,
            migrator: LegacyCredentialMigrator::new(),
        }
    }

    /// Number of legacy plaintext credentials upgraded since process start.
    pub fn legacy_upgrade_count(&self) -> u64 {
        self.migrator.upgrade_count()
    }

    /// Hash a password with the service's configured hasher.
    ///
    /// Admin-style user creation goes through this so every credential in
    /// the store is produced by the same component.
    pub fn hash_password(&self, plaintext: &str) -> DomainResult<String> {
        self.hasher.hash(plaintext)
    }

    /// Register a new account and issue an access token for it.
    ///
    /// Duplicate emails are detected by the store's unique constraint, not
    /// a lookup: two concurrent registrations for the same email race at
    /// the database and exactly one wins.
    ///
    /// # Returns
    ///
    /// * `Ok(RegisteredUser)` - Access token plus the created user
    /// * `Err(Validation)` - Missing or malformed fields
    /// * `Err(Auth(DuplicateCredential))` - Email already registered
    pub async fn register(&self, registration: NewRegistration) -> DomainResult<RegisteredUser> {
        if registration.email.trim().is_empty() {
            return Err(DomainError::required("email"));
        }
        if registration.password.is_empty() {
            return Err(DomainError::required("password"));
        }

        let email = normalize_email(&registration.email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidFormat {
                field: "email".to_string(),
            }
            .into());
        }

        let password_hash = self.hasher.hash(&registration.password)?;

        let user = self
            .users
            .create(NewUser {
                firstname: registration.firstname,
                lastname: registration.lastname,
                email,
                password_hash,
                role_id: registration.role_id,
                position_id: registration.position_id,
            })
            .await?;

        self.audit.record(user.id, actions::REGISTER).await;

        let token = self.token_service.issue_access_token(&user)?;

        Ok(RegisteredUser {
            token,
            user: user.to_public(),
        })
    }

    /// Authenticate with email and password.
    ///
    /// Unknown email and wrong password produce the identical
    /// `InvalidCredentials` error so a caller cannot probe which emails
    /// are registered.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthenticatedUser> {
        if email.trim().is_empty() {
            return Err(DomainError::required("email"));
        }
        if password.is_empty() {
            return Err(DomainError::required("password"));
        }

        let email = normalize_email(email);
        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !self.check_credential(&user, password).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.token_service.issue_access_token(&user)?;
        let refresh_token = self.token_service.issue_refresh_token(user.id)?;

        self.tokens
            .insert(NewRefreshToken::new(
                user.id,
                refresh_token.clone(),
                self.token_service.refresh_ttl_seconds(),
            ))
            .await?;

        // Opportunistic sweep keeps the refresh table bounded without a
        // background job. Losing the sweep is not worth failing a login.
        if let Err(e) = self.tokens.delete_expired_for_user(user.id).await {
            tracing::warn!(user_id = user.id, error = %e, "expired refresh token sweep failed");
        }

        self.audit.record(user.id, actions::LOGIN).await;

        Ok(AuthenticatedUser {
            access_token,
            refresh_token,
            expires_in: self.token_service.access_ttl_seconds(),
            user: user.to_public(),
        })
    }

    /// Mint a new access token from a persisted refresh token.
    ///
    /// The refresh token itself is not rotated; it stays valid until its
    /// own expiry.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - New access token for the owning user
    /// * `Err(Auth(InvalidRefreshToken))` - No such row in the store
    /// * `Err(Auth(ExpiredRefreshToken))` - Row expired or token fails
    ///   verification
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<String> {
        if refresh_token.is_empty() {
            return Err(DomainError::required("token"));
        }

        let row = match self.tokens.find_by_token(refresh_token).await? {
            Some(row) => row,
            None => return Err(AuthError::InvalidRefreshToken.into()),
        };

        if row.is_expired() {
            return Err(AuthError::ExpiredRefreshToken.into());
        }

        let claims = self
            .token_service
            .verify_refresh_token(refresh_token)
            .map_err(|_| AuthError::ExpiredRefreshToken)?;

        let user_id = claims
            .user_id()
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        let user = match self.users.find_by_id(user_id).await? {
            Some(user) => user,
            None => return Err(AuthError::InvalidRefreshToken.into()),
        };

        self.token_service.issue_access_token(&user)
    }

    /// Check a presented password against the stored credential, taking the
    /// legacy migration path when the stored value is not hash-shaped.
    async fn check_credential(&self, user: &User, password: &str) -> DomainResult<bool> {
        if PasswordHasher::is_hash(&user.password_hash) {
            return Ok(self.hasher.verify(password, &user.password_hash));
        }

        // Legacy row: constant-time plaintext comparison, then upgrade.
        if !self.migrator.matches(password, &user.password_hash) {
            return Ok(false);
        }

        let upgraded = self.hasher.hash(password)?;
        self.users.update_password_hash(user.id, &upgraded).await?;
        self.migrator.record_upgrade();
        Ok(true)
    }
}
