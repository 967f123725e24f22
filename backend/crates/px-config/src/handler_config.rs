use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HANDLER_TIMEOUT_SECS, MAX_HANDLER_TIMEOUT_SECS,
    MIN_HANDLER_TIMEOUT_SECS, Section,
};

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;

const TIMEOUT_RANGE: RangeInclusive<u64> = MIN_HANDLER_TIMEOUT_SECS..=MAX_HANDLER_TIMEOUT_SECS;

/// Per-request deadline applied around every session handler
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    pub timeout_secs: u64,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HANDLER_TIMEOUT_SECS,
        }
    }
}

impl HandlerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !TIMEOUT_RANGE.contains(&self.timeout_secs) {
            return Err(ConfigError::invalid(
                Section::Handler,
                format!(
                    "handler.timeout_secs must be {}-{}, got {}",
                    TIMEOUT_RANGE.start(),
                    TIMEOUT_RANGE.end(),
                    self.timeout_secs
                ),
            ));
        }

        Ok(())
    }

    /// Must stay below the access token lifetime; `Config::validate` checks both together
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
