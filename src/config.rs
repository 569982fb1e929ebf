//! Desk configuration.

use crate::error::ConfigError;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_CONSULTATION_MINUTES: i64 = 15;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings supplied once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Minutes assumed per consultation when estimating waits.
    pub consultation_minutes: i64,
    /// `tracing` filter directive, e.g. `info` or `walkin_queue=debug`.
    pub log_filter: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        DeskConfig {
            consultation_minutes: DEFAULT_CONSULTATION_MINUTES,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DeskConfig {
    pub fn new(consultation_minutes: i64, log_filter: String) -> Result<Self, ConfigError> {
        let config = DeskConfig {
            consultation_minutes,
            log_filter,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.consultation_minutes <= 0 {
            return Err(ConfigError::InvalidConsultation(self.consultation_minutes));
        }
        self.env_filter().map(|_| ())
    }

    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter)
            .map_err(|_| ConfigError::InvalidLogFilter(self.log_filter.clone()))
    }
}
