mod auth_config;
mod config;
mod database_config;
mod error;
mod handler_config;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult, Section};
pub use handler_config::HandlerConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "PX_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".px";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "identity.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 15 * 60;
const MIN_ACCESS_TOKEN_TTL_SECS: u64 = 60;
const MAX_ACCESS_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_REFRESH_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;
const MAX_REFRESH_TOKEN_TTL_SECS: u64 = 90 * 24 * 60 * 60;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60 * 60;
const MIN_SWEEP_INTERVAL_SECS: u64 = 10;

const DEFAULT_HANDLER_TIMEOUT_SECS: u64 = 30;
const MIN_HANDLER_TIMEOUT_SECS: u64 = 1;
const MAX_HANDLER_TIMEOUT_SECS: u64 = 5 * 60;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
