//! Notification entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification row addressed to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
