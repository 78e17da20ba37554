use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use dh_api::app::create_app;
use dh_api::realtime::EventHub;
use dh_api::state::AppState;
use dh_core::repositories::{
    KnowledgebaseRepository, MetaRepository, NotificationRepository, TaskRepository,
    TokenRepository, UserRepository,
};
use dh_core::services::{AuditService, AuthService, PasswordHasher, TokenConfig, TokenService};
use dh_infra::database::mysql::{
    MySqlAuditLogRepository, MySqlKnowledgebaseRepository, MySqlMetaRepository,
    MySqlNotificationRepository, MySqlTaskRepository, MySqlTokenRepository, MySqlUserRepository,
};
use dh_infra::database::DatabasePool;
use dh_shared::config::{DatabaseConfig, HashConfig, JwtConfig, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting DeskHub API server");

    // Load configuration
    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let jwt_config = JwtConfig::from_env();
    let hash_config = HashConfig::from_env();

    if jwt_config.is_using_default_secret() {
        warn!(
            "JWT_SECRET/REFRESH_SECRET not set; falling back to built-in development \
             secrets. This is unsafe for production."
        );
    }

    // One pool, owned here and injected everywhere; never a hidden global.
    let database = DatabasePool::new(database_config).await?;
    let pool = database.get_pool().clone();

    let users: Arc<dyn UserRepository> = Arc::new(MySqlUserRepository::new(pool.clone()));
    let tokens: Arc<dyn TokenRepository> = Arc::new(MySqlTokenRepository::new(pool.clone()));
    let tasks: Arc<dyn TaskRepository> = Arc::new(MySqlTaskRepository::new(pool.clone()));
    let knowledgebase: Arc<dyn KnowledgebaseRepository> =
        Arc::new(MySqlKnowledgebaseRepository::new(pool.clone()));
    let notifications: Arc<dyn NotificationRepository> =
        Arc::new(MySqlNotificationRepository::new(pool.clone()));
    let meta: Arc<dyn MetaRepository> = Arc::new(MySqlMetaRepository::new(pool.clone()));

    let token_service = Arc::new(TokenService::new(TokenConfig::from(&jwt_config)));
    let audit_service = Arc::new(AuditService::new(Arc::new(MySqlAuditLogRepository::new(
        pool,
    ))));
    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        tokens,
        token_service.clone(),
        audit_service,
        PasswordHasher::new(hash_config),
    ));

    let state = web::Data::new(AppState {
        auth_service,
        token_service,
        users,
        tasks,
        knowledgebase,
        notifications,
        meta,
        events: EventHub::new(),
    });

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
