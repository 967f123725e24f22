use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_TOKEN_TTL_SECS, DEFAULT_REFRESH_TOKEN_TTL_SECS,
    DEFAULT_SWEEP_INTERVAL_SECS, MAX_ACCESS_TOKEN_TTL_SECS, MAX_REFRESH_TOKEN_TTL_SECS,
    MIN_ACCESS_TOKEN_TTL_SECS, MIN_JWT_SECRET_LENGTH, MIN_SWEEP_INTERVAL_SECS, Section,
};

use std::time::Duration;

use serde::Deserialize;

/// Token signing and lifetime settings.
///
/// The secret is loaded once at startup and shared read-only for the life
/// of the process.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: Option<String>,
    pub access_token_ttl_secs: u64,
    pub refresh_token_ttl_secs: u64,
    /// How often expired refresh records are swept
    pub sweep_interval_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TOKEN_TTL_SECS,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

// Debug by hand so the secret never reaches a log line
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("access_token_ttl_secs", &self.access_token_ttl_secs)
            .field("refresh_token_ttl_secs", &self.refresh_token_ttl_secs)
            .field("sweep_interval_secs", &self.sweep_interval_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::invalid(
                    Section::Auth,
                    "auth.jwt_secret is required (set PX_AUTH_JWT_SECRET or [auth] jwt_secret)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::invalid(
                    Section::Auth,
                    format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    ),
                ));
            }
            Some(_) => {}
        }

        if self.access_token_ttl_secs < MIN_ACCESS_TOKEN_TTL_SECS
            || self.access_token_ttl_secs > MAX_ACCESS_TOKEN_TTL_SECS
        {
            return Err(ConfigError::invalid(
                Section::Auth,
                format!(
                    "auth.access_token_ttl_secs must be {}-{}, got {}",
                    MIN_ACCESS_TOKEN_TTL_SECS, MAX_ACCESS_TOKEN_TTL_SECS, self.access_token_ttl_secs
                ),
            ));
        }

        if self.refresh_token_ttl_secs <= self.access_token_ttl_secs
            || self.refresh_token_ttl_secs > MAX_REFRESH_TOKEN_TTL_SECS
        {
            return Err(ConfigError::invalid(
                Section::Auth,
                format!(
                    "auth.refresh_token_ttl_secs must be greater than access_token_ttl_secs ({}) and at most {}, got {}",
                    self.access_token_ttl_secs, MAX_REFRESH_TOKEN_TTL_SECS, self.refresh_token_ttl_secs
                ),
            ));
        }

        if self.sweep_interval_secs < MIN_SWEEP_INTERVAL_SECS {
            return Err(ConfigError::invalid(
                Section::Auth,
                format!(
                    "auth.sweep_interval_secs must be at least {}, got {}",
                    MIN_SWEEP_INTERVAL_SECS, self.sweep_interval_secs
                ),
            ));
        }

        Ok(())
    }

    /// Secret bytes for the token issuer. Only meaningful after `validate()`.
    pub fn secret_bytes(&self) -> ConfigErrorResult<&[u8]> {
        self.jwt_secret
            .as_deref()
            .map(str::as_bytes)
            .ok_or_else(|| ConfigError::invalid(Section::Auth, "auth.jwt_secret is not set"))
    }

    pub fn access_token_ttl(&self) -> Duration {
        Duration::from_secs(self.access_token_ttl_secs)
    }

    pub fn refresh_token_ttl(&self) -> Duration {
        Duration::from_secs(self.refresh_token_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}
