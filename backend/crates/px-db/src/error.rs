use px_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity already exists: {email} {location}")]
    DuplicateIdentity {
        email: String,
        location: ErrorLocation,
    },

    #[error("Corrupt row in {table}: {message} {location}")]
    CorruptRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Reclassify a unique-constraint violation as a duplicate identity.
    /// Any other error is wrapped unchanged.
    #[track_caller]
    pub fn from_identity_insert(source: sqlx::Error, email: &str) -> Self {
        let is_unique_violation = match &source {
            sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
            _ => false,
        };

        if is_unique_violation {
            Self::DuplicateIdentity {
                email: email.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            Self::Sqlx {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }

    #[track_caller]
    pub(crate) fn corrupt(table: &'static str, message: impl Into<String>) -> Self {
        Self::CorruptRow {
            table,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
