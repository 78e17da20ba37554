//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Intentionally permissive: one @, no whitespace, a dot in the domain.
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Check whether a string looks like an email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Normalize an email for storage and lookup: trim and lowercase.
///
/// All email comparisons in the system go through this, so the unique
/// constraint on `users.email` sees one canonical form.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
