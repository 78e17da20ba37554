//! Application state shared across handlers.

use std::sync::Arc;

use dh_core::repositories::{
    KnowledgebaseRepository, MetaRepository, NotificationRepository, TaskRepository,
    UserRepository,
};
use dh_core::services::{AuthService, TokenService};

use crate::realtime::EventHub;

/// Dependency bundle injected into every handler.
///
/// Constructed once in the composition root and cloned per worker via
/// `web::Data`; repositories are trait objects so tests can swap in
/// in-memory doubles.
pub struct AppState {
    /// Session lifecycle coordinator
    pub auth_service: Arc<AuthService>,

    /// Token verifier used by the JWT gate middleware
    pub token_service: Arc<TokenService>,

    pub users: Arc<dyn UserRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub knowledgebase: Arc<dyn KnowledgebaseRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
    pub meta: Arc<dyn MetaRepository>,

    /// Broadcast hub feeding the WebSocket change feed
    pub events: EventHub,
}
