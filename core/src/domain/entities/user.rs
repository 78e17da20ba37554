//! User entity representing a registered DeskHub account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,

    pub firstname: String,

    pub lastname: String,

    /// Normalized-lowercase email, unique across the system
    pub email: String,

    /// Opaque password hash. Never serialized into responses.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Role reference (`user_role.id`)
    pub role_id: Option<i64>,

    /// Position reference (`user_position.id`)
    pub position_id: Option<i64>,

    /// Free-form account status (e.g. "active")
    pub status: Option<String>,

    /// Path to the profile image, if one was uploaded
    pub profile_image: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Display name used in token claims and UI listings.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.firstname, self.lastname);
        name.trim().to_string()
    }

    /// Client-safe view of this user.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            email: self.email.clone(),
            role_id: self.role_id,
            position_id: self.position_id,
            profile_image: self.profile_image.clone(),
            created_at: self.created_at,
        }
    }
}

/// Fields required to insert a new user row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: Option<i64>,
    pub position_id: Option<i64>,
}

/// Partial update with enumerated allowed fields.
///
/// Restricting updates to this set is what keeps clients from overwriting
/// `id`, `email`, `password_hash`, or `created_at` through a patch body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserChanges {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub position_id: Option<i64>,
    pub role_id: Option<i64>,
    pub status: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.firstname.is_none()
            && self.lastname.is_none()
            && self.position_id.is_none()
            && self.role_id.is_none()
            && self.status.is_none()
    }
}

/// Client-safe user view: everything except the credential column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub role_id: Option<i64>,
    pub position_id: Option<i64>,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Listing row joined with role and position names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub role: String,
    pub role_id: i64,
    pub position: String,
    pub position_id: i64,
}
