//! Log entry structure

use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;

/// One accepted log call, rendered into the exact line the worker writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub line: String,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so that every entry occupies exactly one physical line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Build `"<timestamp> <message>"` using the current local time
    pub fn new(level: LogLevel, message: &str, timestamp_format: &TimestampFormat) -> Self {
        Self::with_timestamp(level, &timestamp_format.now(), message)
    }

    pub fn with_timestamp(level: LogLevel, timestamp: &str, message: &str) -> Self {
        let message = Self::sanitize_message(message);
        let mut line = String::with_capacity(timestamp.len() + 1 + message.len());
        line.push_str(timestamp);
        line.push(' ');
        line.push_str(&message);
        Self { level, line }
    }
}
