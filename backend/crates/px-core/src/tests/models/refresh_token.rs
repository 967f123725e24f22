use crate::RefreshToken;

use chrono::{Duration, Utc};
use uuid::Uuid;

#[test]
fn test_issue_sets_expiry_from_lifetime() {
    let issued_at = Utc::now();
    let lifetime = Duration::days(7);

    let record = RefreshToken::issue(Uuid::new_v4(), "token".to_string(), issued_at, lifetime);

    assert_eq!(record.created_at, issued_at);
    assert_eq!(record.expires_at, issued_at + lifetime);
}
