//! Shared utilities and common types for the DeskHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelope structures
//! - List range handling for batch endpoints
//! - Validation utilities (email normalization, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, HashConfig, JwtConfig, ServerConfig};
pub use types::{ErrorResponse, ListRange};
pub use utils::validation;
