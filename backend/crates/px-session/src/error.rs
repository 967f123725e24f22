use px_auth::AuthError;
use px_core::ErrorLocation;
use px_db::DbError;

use std::panic::Location;

use thiserror::Error;

/// Failure kinds a session operation can surface.
///
/// `Internal` keeps its detail for logs only; `client_message` never leaks it.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Identity already exists {location}")]
    DuplicateIdentity { location: ErrorLocation },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Invalid token {location}")]
    InvalidToken { location: ErrorLocation },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_token() -> Self {
        Self::InvalidToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateIdentity { .. } => "DUPLICATE_IDENTITY",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Text safe to hand to a client
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::DuplicateIdentity { .. } => "An account with this email already exists",
            Self::InvalidCredentials { .. } => "Invalid email or password",
            Self::InvalidToken { .. } => "Invalid or expired token",
            Self::Internal { .. } => "Internal server error",
        }
    }
}

impl From<DbError> for SessionError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        match err {
            DbError::DuplicateIdentity { location, .. } => Self::DuplicateIdentity { location },
            other => Self::Internal {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<AuthError> for SessionError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        if err.is_unauthorized() {
            Self::invalid_token()
        } else {
            Self::Internal {
                message: err.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
