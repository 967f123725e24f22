use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::User.as_str(), "user");
    assert_eq!(UserRole::Admin.as_str(), "admin");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("user").unwrap(), UserRole::User);
    assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
    assert!(UserRole::from_str("Admin").is_err());
    assert!(UserRole::from_str("root").is_err());
}

#[test]
fn test_user_role_default_is_user() {
    assert_eq!(UserRole::default(), UserRole::User);
}

#[test]
fn test_user_role_display_matches_storage_form() {
    assert_eq!(UserRole::Admin.to_string(), "admin");
    assert_eq!(UserRole::User.to_string(), UserRole::User.as_str());
}
