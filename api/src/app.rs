//! Application factory.
//!
//! Builds the actix-web application around an [`AppState`]: routes,
//! middleware, JSON limits, and the WebSocket entry point. The binary and
//! the integration tests both go through [`create_app`].

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse};

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::middleware::{create_cors, JwtAuth};
use crate::realtime::ws_entry;
use crate::routes::{auth, knowledgebase, meta, notifications, tasks, users};
use crate::state::AppState;

/// Create and configure the application with all dependencies.
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let token_service = state.token_service.clone();
    let gate = move || JwtAuth::new(token_service.clone());

    // Generous limit: knowledgebase bodies can embed sizable payloads.
    let json_config = web::JsonConfig::default()
        .limit(50 * 1024 * 1024)
        .error_handler(|err, _req| {
            let body = ErrorResponse::new("MALFORMED_JSON", "Malformed JSON body")
                .to_response(StatusCode::BAD_REQUEST);
            InternalError::from_response(err, body).into()
        });

    App::new()
        .app_data(state)
        .app_data(json_config)
        .wrap(Logger::default())
        .wrap(create_cors())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Real-time change feed
        .route("/ws", web::get().to(ws_entry))
        // Auth routes
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(auth::register))
                .route("/login", web::post().to(auth::login)),
        )
        // User routes; /total and /refresh are registered ahead of /{id}
        .service(
            web::scope("/users")
                .route("/total", web::get().to(users::total))
                .route("/refresh", web::post().to(users::refresh))
                .route("", web::get().to(users::list).wrap(gate()))
                .route("", web::post().to(users::create))
                .route("/{id}", web::get().to(users::get_by_id))
                .route("/{id}", web::patch().to(users::patch))
                .route("/{id}", web::delete().to(users::delete)),
        )
        // Task routes
        .service(
            web::scope("/tasks")
                .route("", web::get().to(tasks::list))
                .route("", web::post().to(tasks::create))
                .route("/{id}", web::patch().to(tasks::patch))
                .route("/{id}", web::put().to(tasks::replace))
                .route("/{id}", web::delete().to(tasks::delete)),
        )
        // Knowledgebase routes
        .service(
            web::scope("/knowledgebase")
                .route("/total", web::get().to(knowledgebase::total).wrap(gate()))
                .route("", web::get().to(knowledgebase::list).wrap(gate()))
                .route("", web::post().to(knowledgebase::create))
                .route("/{id}", web::patch().to(knowledgebase::patch))
                .route("/{id}", web::put().to(knowledgebase::replace))
                .route("/{id}", web::delete().to(knowledgebase::delete)),
        )
        // Notification routes
        .service(
            web::scope("/notifications")
                .route("", web::get().to(notifications::list).wrap(gate()))
                .route(
                    "/{id}",
                    web::get().to(notifications::list_for_user).wrap(gate()),
                ),
        )
        // Meta lookups
        .service(
            web::scope("/api").route("/meta", web::get().to(meta::get_meta).wrap(gate())),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "deskhub-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "NOT_FOUND",
        "message": "The requested resource was not found"
    }))
}
