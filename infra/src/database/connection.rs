//! Database connection pool management
//!
//! Connection pooling uses SQLx with MySQL. The pool is constructed once by
//! the composition root and handed to repositories; nothing here is lazily
//! initialized or global.

use std::str::FromStr;
use std::time::Duration;

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    ConnectOptions, MySqlPool,
};
use tracing::log::LevelFilter;

use dh_shared::config::DatabaseConfig;

use crate::InfraError;

/// Database connection pool wrapper
///
/// Owns the SQLx MySQL pool together with the configuration that built it.
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfraError>` - Database pool or error
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfraError> {
        tracing::info!(
            max_connections = config.max_connections,
            "creating database connection pool"
        );

        let connect_options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfraError::Config(format!("Invalid database URL: {}", e)))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1));

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to create database pool");
                InfraError::Database(e)
            })?;

        tracing::info!("database connection pool created");

        Ok(Self { pool })
    }

    /// Get a reference to the underlying SQLx pool.
    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Check if the database connection is healthy.
    pub async fn health_check(&self) -> Result<bool, InfraError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| true)
            .map_err(InfraError::Database)
    }

    /// Close all pool connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
