//! Identity entity - a registered catalog user.

use crate::{Genre, UserRole};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered identity.
///
/// `email` is unique across all identities. Uniqueness is enforced by the
/// store's constraint, never by looking the email up before inserting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Case-sensitive as stored
    pub email: String,
    /// PHC-formatted password hash, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub favorite_genres: Vec<Genre>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new identity with a fresh id and matching timestamps
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
        role: UserRole,
        favorite_genres: Vec<Genre>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            password_hash,
            role,
            favorite_genres,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
