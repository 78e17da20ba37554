//! List range handling for batch endpoints.
//!
//! Batch endpoints accept `_start` and `_limit` query parameters and return
//! the total row count in an `X-Total-Count` response header so list
//! clients can paginate.

use serde::{Deserialize, Serialize};

/// Header carrying the total row count on batch responses.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

const MAX_LIMIT: i64 = 1000;

/// Offset/limit range parsed from `_start` / `_limit` query parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListRange {
    /// Row offset to start from
    #[serde(default, rename = "_start")]
    pub start: i64,

    /// Maximum number of rows to return
    #[serde(default = "default_limit", rename = "_limit")]
    pub limit: i64,
}

impl Default for ListRange {
    fn default() -> Self {
        Self {
            start: 0,
            limit: default_limit(),
        }
    }
}

impl ListRange {
    pub fn new(start: i64, limit: i64) -> Self {
        Self { start, limit }.clamped()
    }

    /// Clamp the range to sane bounds: non-negative offset, 1..=1000 rows.
    pub fn clamped(self) -> Self {
        Self {
            start: self.start.max(0),
            limit: self.limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Offset for SQL queries
    pub fn offset(&self) -> i64 {
        self.start
    }
}

fn default_limit() -> i64 {
    100
}
