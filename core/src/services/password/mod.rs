//! Password hashing and legacy credential migration.

use std::sync::atomic::{AtomicU64, Ordering};

use constant_time_eq::constant_time_eq;

use dh_shared::config::HashConfig;

use crate::errors::{DomainError, DomainResult};

/// One-way password hashing over bcrypt
///
/// `verify` never errors outward: a malformed stored hash or any mismatch
/// is simply `false`, so callers have exactly one failure path.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher with the configured cost factor.
    pub fn new(config: HashConfig) -> Self {
        Self { cost: config.cost }
    }

    /// Hashes a plaintext password.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The salted bcrypt hash
    /// * `Err(DomainError)` - Hashing failed (malformed input)
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Verifies a plaintext password against a stored bcrypt hash.
    pub fn verify(&self, plaintext: &str, stored_hash: &str) -> bool {
        bcrypt::verify(plaintext, stored_hash).unwrap_or(false)
    }

    /// Structural check: does the stored value look like a bcrypt hash?
    ///
    /// All bcrypt variants ($2a$, $2b$, $2y$, ...) share the `$2` prefix.
    pub fn is_hash(stored: &str) -> bool {
        stored.starts_with("$2")
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(HashConfig::default())
    }
}

/// One-time lazy migration path for pre-hashing credential rows.
///
/// Some user rows predate password hashing and store the raw password.
/// When the stored value fails the bcrypt structural check, login compares
/// the presented password against the stored value in constant time and, on
/// match, the caller re-hashes and persists the upgrade. A hash is never
/// downgraded back to plaintext.
///
/// The upgrade counter lets operators observe when the legacy population is
/// exhausted and this type can be deleted.
#[derive(Default)]
pub struct LegacyCredentialMigrator {
    upgrades: AtomicU64,
}

impl LegacyCredentialMigrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constant-time comparison of a presented password against a stored
    /// plaintext value.
    pub fn matches(&self, plaintext: &str, stored: &str) -> bool {
        constant_time_eq(plaintext.as_bytes(), stored.as_bytes())
    }

    /// Record that one legacy credential was re-hashed and persisted.
    pub fn record_upgrade(&self) {
        let total = self.upgrades.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::warn!(total_upgrades = total, "migrated legacy plaintext credential to bcrypt");
    }

    /// Number of legacy credentials upgraded since process start.
    pub fn upgrade_count(&self) -> u64 {
        self.upgrades.load(Ordering::Relaxed)
    }
}
