use std::fmt;
use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// Config section a validation failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Server,
    Database,
    Auth,
    Handler,
    Logging,
    /// Process environment (working directory, config dir)
    Environment,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Server => "server",
            Section::Database => "database",
            Section::Auth => "auth",
            Section::Handler => "handler",
            Section::Logging => "logging",
            Section::Environment => "environment",
        };
        f.write_str(name)
    }
}

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid {section} config: {message} {location}")]
    Invalid {
        section: Section,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid<S: Into<String>>(section: Section, message: S) -> Self {
        ConfigError::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Section that failed validation; `None` for read and parse failures
    pub fn section(&self) -> Option<Section> {
        match self {
            ConfigError::Invalid { section, .. } => Some(*section),
            ConfigError::Io { .. } | ConfigError::Toml { .. } => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
