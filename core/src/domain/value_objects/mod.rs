//! Value objects returned by domain services.

mod auth_response;

pub use auth_response::{AuthenticatedUser, RegisteredUser};
