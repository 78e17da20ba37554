//! Configuration types shared across the server crates.
//!
//! Every struct here can be built from environment variables via `from_env`,
//! with development defaults that are safe to run locally but loudly wrong
//! for production (see [`JwtConfig::is_using_default_secret`]).

mod auth;
mod database;
mod server;

pub use auth::{HashConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use server::ServerConfig;
