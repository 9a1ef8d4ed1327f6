//! Logger configuration
//!
//! Everything a [`Logger`](super::Logger) needs besides the error hook and
//! the stack capture provider, in a form that can be loaded from JSON.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Hand-off channel capacity of a default logger: a pure rendezvous
pub const DEFAULT_QUEUE_CAPACITY: usize = 0;

fn default_min_level() -> LogLevel {
    LogLevel::Info
}

/// Serializable logger configuration
///
/// # Examples
///
/// ```
/// use async_file_logger::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{
///     "path": "/var/log/app.log",
///     "min_level": "Debug",
///     "log_to_console": true
/// }"#).unwrap();
///
/// assert_eq!(config.min_level, LogLevel::Debug);
/// assert_eq!(config.queue_capacity, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Destination file
    pub path: PathBuf,

    /// Minimum level by ordinal; defaults to `Info`
    #[serde(default = "default_min_level")]
    pub min_level: LogLevel,

    /// Record limit. Stored and reported, not enforced.
    #[serde(default)]
    pub max_records: u64,

    /// Echo every line to standard output
    #[serde(default)]
    pub log_to_console: bool,

    #[serde(default)]
    pub timestamp_format: TimestampFormat,

    /// Entries that may wait for the worker; 0 makes every log call a
    /// rendezvous with it
    #[serde(default)]
    pub queue_capacity: usize,
}

impl LoggerConfig {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            min_level: default_min_level(),
            max_records: 0,
            log_to_console: false,
            timestamp_format: TimestampFormat::default(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(LoggerError::config("LoggerConfig", "path must not be empty"));
        }
        if let TimestampFormat::Custom(ref pattern) = self.timestamp_format {
            if pattern.is_empty() {
                return Err(LoggerError::config(
                    "LoggerConfig",
                    "custom timestamp format must not be empty",
                ));
            }
            if !self.timestamp_format.is_valid() {
                return Err(LoggerError::config(
                    "LoggerConfig",
                    format!("invalid custom timestamp format '{}'", pattern),
                ));
            }
        }
        Ok(())
    }
}
