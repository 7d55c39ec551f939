use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user in the directory, keyed by a server-generated opaque id.
///
/// `email` is unique at the store; the id is stable across repeated logins
/// for the same email (upsert-on-conflict returns the existing row).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Login email address (unique, case-sensitive as stored)
    pub email: String,
    /// When the user row was created
    pub created_at: DateTime<Utc>,
    /// When the user row was last written
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user row with a caller-supplied id
    pub fn new(id: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}
