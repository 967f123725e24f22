#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use px_core::{Genre, RefreshToken, User, UserRole};
use uuid::Uuid;

/// Creates a test User with sensible defaults
pub fn create_test_user(email: &str) -> User {
    User::new(
        "Test".to_string(),
        "User".to_string(),
        email.to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        UserRole::User,
        vec![Genre::new(1, "Drama"), Genre::new(5, "Horror")],
    )
}

/// Creates a refresh record for the user expiring `lifetime` after `issued_at`
pub fn create_test_refresh_token(
    user_id: Uuid,
    issued_at: DateTime<Utc>,
    lifetime: Duration,
) -> RefreshToken {
    RefreshToken::issue(
        user_id,
        format!("refresh-{}", Uuid::new_v4()),
        issued_at,
        lifetime,
    )
}
