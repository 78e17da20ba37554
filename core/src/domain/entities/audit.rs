//! Audit log entity for recording authentication events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known audit actions written to the `logs` table.
pub mod actions {
    pub const LOGIN: &str = "User logged in";
    pub const REGISTER: &str = "User registered";
}

/// Row of the `logs` audit table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: i64,
    pub user_id: i64,
    pub action: String,
    pub created_at: DateTime<Utc>,
}
