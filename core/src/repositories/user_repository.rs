//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use dh_shared::ListRange;

use crate::domain::entities::user::{NewUser, User, UserChanges, UserSummary};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their normalized email.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Store error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Insert a new user row.
    ///
    /// Duplicate detection is the store's job: implementations must attempt
    /// the insert and translate the unique-constraint violation on `email`
    /// into `AuthError::DuplicateCredential`. Checking for an existing row
    /// first would race with concurrent registrations.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user with its assigned id
    /// * `Err(DomainError::Auth(DuplicateCredential))` - Email already taken
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// List users joined with role and position names, newest first.
    async fn list(&self, range: ListRange) -> Result<Vec<UserSummary>, DomainError>;

    /// Count all user rows.
    async fn count(&self) -> Result<i64, DomainError>;

    /// Apply a partial update restricted to the enumerated fields.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The updated user
    /// * `Ok(None)` - No user with that id
    async fn update(&self, id: i64, changes: UserChanges) -> Result<Option<User>, DomainError>;

    /// Replace the stored password hash for a user.
    ///
    /// Used by the legacy credential migration; nothing else writes this
    /// column after registration.
    async fn update_password_hash(&self, id: i64, password_hash: &str)
        -> Result<(), DomainError>;

    /// Delete a user row.
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
