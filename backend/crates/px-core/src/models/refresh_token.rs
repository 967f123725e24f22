//! Persisted refresh-token record.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server-side record backing an issued refresh token.
///
/// A record is usable at most once: the refresh flow deletes it before the
/// replacement pair is handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Build a record for a freshly signed token.
    ///
    /// `expires_at` is always `issued_at + lifetime`.
    pub fn issue(user_id: Uuid, token: String, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            token,
            expires_at: issued_at + lifetime,
            created_at: issued_at,
        }
    }
}
