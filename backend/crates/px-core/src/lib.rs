pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::genre::Genre;
pub use models::refresh_token::RefreshToken;
pub use models::user::User;
pub use models::user_role::UserRole;
pub use models::user_summary::UserSummary;
pub use validation::field_error::FieldError;
pub use validation::rules::{
    validate_login, validate_refresh_token, validate_register, validate_update_names,
};

#[cfg(test)]
mod tests;
