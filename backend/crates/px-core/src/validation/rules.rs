use crate::FieldError;
use crate::UserRole;
use crate::validation::{
    MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH,
};

use std::str::FromStr;

/// Validate a registration request
pub fn validate_register(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    role: Option<&str>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    errors.extend(check_name("first_name", first_name));
    errors.extend(check_name("last_name", last_name));
    errors.extend(check_email(email));
    errors.extend(check_password(password));

    if let Some(role) = role
        && UserRole::from_str(role).is_err()
    {
        errors.push(FieldError::new("role", "must be either user or admin"));
    }

    errors
}

/// Validate a login request
pub fn validate_login(email: &str, password: &str) -> Vec<FieldError> {
    check_email(email)
        .into_iter()
        .chain(check_password(password))
        .collect()
}

/// Validate a refresh or logout request
pub fn validate_refresh_token(refresh_token: &str) -> Vec<FieldError> {
    if refresh_token.trim().is_empty() {
        return vec![FieldError::new("refresh_token", "must be provided")];
    }

    Vec::new()
}

/// Validate a profile name update. `None` leaves the field untouched.
pub fn validate_update_names(first_name: Option<&str>, last_name: Option<&str>) -> Vec<FieldError> {
    first_name
        .and_then(|name| check_name("first_name", name))
        .into_iter()
        .chain(last_name.and_then(|name| check_name("last_name", name)))
        .collect()
}

fn check_name(field: &'static str, value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::new(field, "must be provided"));
    }

    if value.len() < MIN_NAME_LENGTH {
        return Some(FieldError::new(
            field,
            format!("must be at least {} characters long", MIN_NAME_LENGTH),
        ));
    }

    if value.len() > MAX_NAME_LENGTH {
        return Some(FieldError::new(
            field,
            format!("must not be more than {} bytes long", MAX_NAME_LENGTH),
        ));
    }

    None
}

fn check_email(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::new("email", "must be provided"));
    }

    if value.len() > MAX_EMAIL_LENGTH || !is_well_formed_email(value) {
        return Some(FieldError::new("email", "must be a valid email address"));
    }

    None
}

fn check_password(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::new("password", "must be provided"));
    }

    if value.len() < MIN_PASSWORD_LENGTH {
        return Some(FieldError::new(
            "password",
            format!("must be at least {} bytes long", MIN_PASSWORD_LENGTH),
        ));
    }

    if value.len() > MAX_PASSWORD_LENGTH {
        return Some(FieldError::new(
            "password",
            format!("must not be more than {} bytes long", MAX_PASSWORD_LENGTH),
        ));
    }

    None
}

/// `local@domain` where the local part uses the RFC 5322 atom characters and
/// every domain label is 1-63 alphanumerics/hyphens without a leading or
/// trailing hyphen.
fn is_well_formed_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));

    let domain_ok = domain.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    local_ok && domain_ok
}
