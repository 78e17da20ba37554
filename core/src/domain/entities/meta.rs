//! Read-only lookup entities backing form dropdowns.

use serde::{Deserialize, Serialize};

/// Row of the `user_role` lookup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// Row of the `user_position` lookup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: i64,
    pub name: String,
}

/// Minimal user reference for assignment pickers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
}
