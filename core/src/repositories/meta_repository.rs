//! Meta lookup repository trait.

use async_trait::async_trait;

use crate::domain::entities::meta::{Position, Role, UserRef};
use crate::errors::DomainError;

/// Repository trait for the read-only lookup tables backing form dropdowns
#[async_trait]
pub trait MetaRepository: Send + Sync {
    /// List roles ordered by name.
    async fn roles(&self) -> Result<Vec<Role>, DomainError>;

    /// List positions ordered by name.
    async fn positions(&self) -> Result<Vec<Position>, DomainError>;

    /// List user references ordered by first name.
    async fn users(&self) -> Result<Vec<UserRef>, DomainError>;
}
