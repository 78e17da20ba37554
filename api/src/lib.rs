//! DeskHub HTTP API.
//!
//! Route handlers, DTOs, middleware, and the WebSocket change feed. The
//! binary entry point in `main.rs` wires concrete MySQL repositories into
//! [`state::AppState`] and serves [`app::create_app`].

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod realtime;
pub mod routes;
pub mod state;
