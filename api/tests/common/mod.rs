//! Shared fixtures for the API integration tests: in-memory repositories
//! and an app state builder.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use actix_web::body::{to_bytes, MessageBody};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use dh_api::realtime::EventHub;
use dh_api::state::AppState;
use dh_core::domain::entities::knowledgebase::{KbArticle, KbChanges, NewKbArticle};
use dh_core::domain::entities::meta::{Position, Role, UserRef};
use dh_core::domain::entities::notification::Notification;
use dh_core::domain::entities::task::{NewTask, Task, TaskChanges, TaskPriority, TaskStatus};
use dh_core::domain::entities::token::{NewRefreshToken, RefreshToken};
use dh_core::domain::entities::user::{NewUser, User, UserChanges, UserSummary};
use dh_core::errors::{AuthError, DomainError};
use dh_core::repositories::{
    AuditLogRepository, KnowledgebaseRepository, MetaRepository, NotificationRepository,
    TaskRepository, TokenRepository, UserRepository,
};
use dh_core::services::{AuditService, AuthService, PasswordHasher, TokenConfig, TokenService};
use dh_shared::config::HashConfig;
use dh_shared::ListRange;

pub const ACCESS_SECRET: &str = "integration-access-secret";
pub const REFRESH_SECRET: &str = "integration-refresh-secret";

/// Drive a request through the app and return (status, parsed JSON body).
///
/// Middleware short-circuits surface as service errors; those are rendered
/// through their error response so every path yields a status and body.
pub async fn send<S, B>(app: &S, req: actix_http::Request) -> (StatusCode, serde_json::Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    match app.call(req).await {
        Ok(resp) => {
            let status = resp.status();
            let bytes = match to_bytes(resp.into_body()).await {
                Ok(bytes) => bytes,
                Err(_) => Default::default(),
            };
            let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
            (status, json)
        }
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status();
            let bytes = match to_bytes(resp.into_body()).await {
                Ok(bytes) => bytes,
                Err(_) => Default::default(),
            };
            let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
            (status, json)
        }
    }
}

pub struct MemoryUsers {
    rows: RwLock<Vec<User>>,
    next_id: AtomicI64,
}

impl MemoryUsers {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.rows.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateCredential.into());
        }
        let created = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            password_hash: user.password_hash,
            role_id: user.role_id,
            position_id: user.position_id,
            status: None,
            profile_image: None,
            created_at: Utc::now(),
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn list(&self, range: ListRange) -> Result<Vec<UserSummary>, DomainError> {
        let range = range.clamped();
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .skip(range.start as usize)
            .take(range.limit as usize)
            .map(|u| UserSummary {
                id: u.id,
                firstname: u.firstname.clone(),
                lastname: u.lastname.clone(),
                role: "agent".to_string(),
                role_id: u.role_id.unwrap_or(0),
                position: "support".to_string(),
                position_id: u.position_id.unwrap_or(0),
            })
            .collect())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.rows.read().await.len() as i64)
    }

    async fn update(&self, id: i64, changes: UserChanges) -> Result<Option<User>, DomainError> {
        let mut rows = self.rows.write().await;
        let Some(user) = rows.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(firstname) = changes.firstname {
            user.firstname = firstname;
        }
        if let Some(lastname) = changes.lastname {
            user.lastname = lastname;
        }
        if let Some(position_id) = changes.position_id {
            user.position_id = Some(position_id);
        }
        if let Some(role_id) = changes.role_id {
            user.role_id = Some(role_id);
        }
        if let Some(status) = changes.status {
            user.status = Some(status);
        }
        Ok(Some(user.clone()))
    }

    async fn update_password_hash(
        &self,
        id: i64,
        password_hash: &str,
    ) -> Result<(), DomainError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                Ok(())
            }
            None => Err(DomainError::not_found("User")),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|u| u.id != id);
        Ok(rows.len() < before)
    }
}

pub struct MemoryTokens {
    rows: RwLock<Vec<RefreshToken>>,
    next_id: AtomicI64,
}

impl MemoryTokens {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl TokenRepository for MemoryTokens {
    async fn insert(&self, token: NewRefreshToken) -> Result<RefreshToken, DomainError> {
        let mut rows = self.rows.write().await;
        let row = RefreshToken {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_id: token.user_id,
            token: token.token,
            expires_at: token.expires_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|r| r.token == token)
            .cloned())
    }

    async fn delete_expired_for_user(&self, user_id: i64) -> Result<u64, DomainError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        let now = Utc::now();
        rows.retain(|r| r.user_id != user_id || r.expires_at > now);
        Ok((before - rows.len()) as u64)
    }
}

pub struct MemoryAudit;

#[async_trait]
impl AuditLogRepository for MemoryAudit {
    async fn record(&self, _user_id: i64, _action: &str) -> Result<(), DomainError> {
        Ok(())
    }
}

pub struct MemoryTasks {
    rows: RwLock<Vec<Task>>,
    next_id: AtomicI64,
}

impl MemoryTasks {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl TaskRepository for MemoryTasks {
    async fn list(&self) -> Result<Vec<Task>, DomainError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, DomainError> {
        Ok(self.rows.read().await.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, task: NewTask) -> Result<Task, DomainError> {
        let mut rows = self.rows.write().await;
        let now = Utc::now();
        let created = Task {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: task.title,
            description: task.description,
            priority: task.priority,
            status: task.status,
            created_at: now,
            updated_at: now,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn patch(&self, id: i64, changes: TaskChanges) -> Result<Option<Task>, DomainError> {
        let mut rows = self.rows.write().await;
        let Some(task) = rows.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        if let Some(title) = changes.title {
            task.title = title;
        }
        if let Some(description) = changes.description {
            task.description = description;
        }
        if let Some(priority) = changes.priority {
            task.priority = priority;
        }
        if let Some(status) = changes.status {
            task.status = status;
        }
        task.updated_at = Utc::now();
        Ok(Some(task.clone()))
    }

    async fn replace(
        &self,
        id: i64,
        title: String,
        description: String,
        priority: TaskPriority,
        status: TaskStatus,
    ) -> Result<Option<Task>, DomainError> {
        let mut rows = self.rows.write().await;
        let Some(task) = rows.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        task.title = title;
        task.description = description;
        task.priority = priority;
        task.status = status;
        task.updated_at = Utc::now();
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|t| t.id != id);
        Ok(rows.len() < before)
    }
}

pub struct MemoryKb {
    rows: RwLock<Vec<KbArticle>>,
    next_id: AtomicI64,
}

impl MemoryKb {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl KnowledgebaseRepository for MemoryKb {
    async fn list(&self, range: ListRange) -> Result<Vec<KbArticle>, DomainError> {
        let range = range.clamped();
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .skip(range.start as usize)
            .take(range.limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.rows.read().await.len() as i64)
    }

    async fn create(&self, article: NewKbArticle) -> Result<KbArticle, DomainError> {
        let mut rows = self.rows.write().await;
        let now = Utc::now();
        let created = KbArticle {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: article.title,
            description: article.description,
            created_at: now,
            updated_at: now,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn patch(&self, id: i64, changes: KbChanges) -> Result<Option<KbArticle>, DomainError> {
        let mut rows = self.rows.write().await;
        let Some(article) = rows.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        if let Some(title) = changes.title {
            article.title = title;
        }
        if let Some(description) = changes.description {
            article.description = description;
        }
        article.updated_at = Utc::now();
        Ok(Some(article.clone()))
    }

    async fn replace(
        &self,
        id: i64,
        title: String,
        description: String,
    ) -> Result<Option<KbArticle>, DomainError> {
        let mut rows = self.rows.write().await;
        let Some(article) = rows.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        article.title = title;
        article.description = description;
        article.updated_at = Utc::now();
        Ok(Some(article.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|a| a.id != id);
        Ok(rows.len() < before)
    }
}

pub struct MemoryNotifications {
    rows: Vec<Notification>,
}

impl MemoryNotifications {
    pub fn new(rows: Vec<Notification>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl NotificationRepository for MemoryNotifications {
    async fn list_all(&self) -> Result<Vec<Notification>, DomainError> {
        Ok(self.rows.clone())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Notification>, DomainError> {
        Ok(self
            .rows
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect())
    }
}

pub struct MemoryMeta;

#[async_trait]
impl MetaRepository for MemoryMeta {
    async fn roles(&self) -> Result<Vec<Role>, DomainError> {
        Ok(vec![Role {
            id: 1,
            name: "agent".to_string(),
        }])
    }

    async fn positions(&self) -> Result<Vec<Position>, DomainError> {
        Ok(vec![Position {
            id: 1,
            name: "support".to_string(),
        }])
    }

    async fn users(&self) -> Result<Vec<UserRef>, DomainError> {
        Ok(Vec::new())
    }
}

/// Build an app state over in-memory repositories.
///
/// Returns the state plus the token service so tests can mint tokens with
/// chosen lifetimes.
pub fn build_state() -> (web::Data<AppState>, Arc<TokenService>) {
    let users: Arc<MemoryUsers> = Arc::new(MemoryUsers::new());
    let tokens: Arc<MemoryTokens> = Arc::new(MemoryTokens::new());

    let token_service = Arc::new(TokenService::new(TokenConfig {
        access_secret: ACCESS_SECRET.to_string(),
        refresh_secret: REFRESH_SECRET.to_string(),
        access_ttl_seconds: 3600,
        refresh_ttl_seconds: 86400,
    }));

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        tokens,
        token_service.clone(),
        Arc::new(AuditService::new_inline(Arc::new(MemoryAudit))),
        PasswordHasher::new(HashConfig { cost: 4 }),
    ));

    let notifications = vec![Notification {
        id: 1,
        user_id: 1,
        message: "Welcome aboard".to_string(),
        created_at: Utc::now(),
    }];

    let state = web::Data::new(AppState {
        auth_service,
        token_service: token_service.clone(),
        users,
        tasks: Arc::new(MemoryTasks::new()),
        knowledgebase: Arc::new(MemoryKb::new()),
        notifications: Arc::new(MemoryNotifications::new(notifications)),
        meta: Arc::new(MemoryMeta),
        events: EventHub::new(),
    });

    (state, token_service)
}
