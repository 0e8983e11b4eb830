//! Database models and request input shapes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user.
///
/// The stored password hash is deliberately absent: it never leaves the
/// persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Row id.
    pub id: i64,
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// Email address, unique across users.
    pub mail: String,
}

/// Registration input.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub mail: String,
    /// Plaintext password; hashed before it reaches the database.
    pub password: String,
}

/// Patch input for an existing user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserUpdate {
    pub firstname: String,
    pub lastname: String,
    pub mail: String,
}

/// Login input.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub mail: String,
    pub password: String,
}
