//! # DeskHub Infrastructure
//!
//! MySQL-backed implementations of the repository traits defined in
//! `dh_core`, plus connection pool construction.

pub mod database;

use thiserror::Error;

/// Infrastructure-level errors raised during wiring and startup
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
