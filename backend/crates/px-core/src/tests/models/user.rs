use crate::{Genre, User, UserRole, UserSummary};

fn sample_user() -> User {
    User::new(
        "Ada".to_string(),
        "Lovelace".to_string(),
        "ada@example.com".to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        UserRole::User,
        vec![Genre::new(1, "Drama"), Genre::new(7, "Sci-Fi")],
    )
}

#[test]
fn test_user_new_sets_matching_timestamps() {
    let user = sample_user();

    assert_eq!(user.created_at, user.updated_at);
    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.full_name(), "Ada Lovelace");
}

#[test]
fn test_user_new_assigns_distinct_ids() {
    assert_ne!(sample_user().id, sample_user().id);
}

#[test]
fn test_summary_keeps_identity_fields() {
    let user = sample_user();
    let summary = UserSummary::from(&user);

    assert_eq!(summary.id, user.id);
    assert_eq!(summary.email, user.email);
    assert_eq!(summary.favorite_genres, user.favorite_genres);
    assert_eq!(summary.role, user.role);
}
