
use px_core::{Genre, User, UserRole};

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn sample_user() -> User {
    User::new(
        "Grace".to_string(),
        "Hopper".to_string(),
        "grace@example.com".to_string(),
        "hash".to_string(),
        UserRole::User,
        vec![Genre::new(3, "Documentary")],
    )
}
