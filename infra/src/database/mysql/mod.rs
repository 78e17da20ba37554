//! MySQL implementations of the repository traits.

mod audit_repository_impl;
mod knowledgebase_repository_impl;
mod meta_repository_impl;
mod notification_repository_impl;
mod task_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use audit_repository_impl::MySqlAuditLogRepository;
pub use knowledgebase_repository_impl::MySqlKnowledgebaseRepository;
pub use meta_repository_impl::MySqlMetaRepository;
pub use notification_repository_impl::MySqlNotificationRepository;
pub use task_repository_impl::MySqlTaskRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use dh_core::errors::DomainError;

/// Map a SQLx failure to an opaque store error, logging the detail.
///
/// The formatted message stays server-side; the api layer renders
/// `DomainError::Store` as a generic 500 body.
pub(crate) fn store_error(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!(error = %error, "{}", context);
    DomainError::Store {
        message: format!("{}: {}", context, error),
    }
}
