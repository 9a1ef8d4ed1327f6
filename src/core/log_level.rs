//! Log level definitions
//!
//! Levels are ordered by ordinal, with `Undefined` lowest and `Debug`
//! highest. A logger configured with a minimum level emits every message
//! whose ordinal is greater than or equal to that minimum. `Undefined`
//! therefore emits everything, `Debug` emits only `Debug`, and `Error`
//! also suppresses `Fatal`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[repr(i16)]
pub enum LogLevel {
    #[default]
    Undefined = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
}

impl LogLevel {
    /// All levels in ordinal order
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Undefined,
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Undefined => "Undefined",
            LogLevel::Fatal => "Fatal",
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
        }
    }

    #[inline]
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    /// Whether a message at `self` passes a logger whose minimum is `min_level`
    #[inline]
    pub fn passes(self, min_level: LogLevel) -> bool {
        self.as_i16() >= min_level.as_i16()
    }
}

impl From<i16> for LogLevel {
    /// Unmapped values become `Undefined`.
    fn from(value: i16) -> Self {
        match value {
            1 => LogLevel::Fatal,
            2 => LogLevel::Error,
            3 => LogLevel::Warn,
            4 => LogLevel::Info,
            5 => LogLevel::Debug,
            _ => LogLevel::Undefined,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UNDEFINED" => Ok(LogLevel::Undefined),
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
