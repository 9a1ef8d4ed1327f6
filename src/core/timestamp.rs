//! Timestamp formatting utilities
//!
//! The timestamp that prefixes every log line is explicit configuration
//! rather than process-wide state. The default is a human-readable stamp
//! with millisecond precision rendered in local time.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// strftime pattern of [`TimestampFormat::Stamp`]: `Jan  8 10:30:45.123`
pub const STAMP_PATTERN: &str = "%b %e %H:%M:%S%.3f";

/// Timestamp format options for the line prefix
///
/// # Examples
///
/// ```
/// use async_file_logger::TimestampFormat;
///
/// let format = TimestampFormat::default();
/// let stamp = format.now();
/// assert!(!stamp.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Month, space-padded day and time with milliseconds: `Jan  8 10:30:45.123`
    ///
    /// Human-readable, not timezone-normalized.
    #[default]
    Stamp,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45.123456+01:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use async_file_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a datetime in any timezone according to this format
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Stamp => datetime.format(STAMP_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    // Unrenderable pattern; keep the line rather than panic
                    out.clear();
                    let _ = write!(out, "{}", datetime.format(STAMP_PATTERN));
                }
                out
            }
        }
    }

    /// Whether every specifier of the pattern is one chrono understands
    ///
    /// Only `Custom` can fail; the built-in formats are always valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            TimestampFormat::Custom(format_str) => {
                !format_str.is_empty()
                    && !StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error))
            }
            _ => true,
        }
    }

    /// Format the current local wall-clock time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            TimestampFormat::Stamp => "Month, day and time with milliseconds (Jan  8 10:30:45.123)",
            TimestampFormat::Iso8601 => "ISO 8601 with milliseconds and offset",
            TimestampFormat::Rfc3339 => "RFC 3339 with timezone offset",
            TimestampFormat::UnixMillis => "Unix timestamp in milliseconds (1736332245123)",
            TimestampFormat::Custom(_) => "Custom strftime format",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_stamp_format() {
        let result = TimestampFormat::Stamp.format(&fixed_datetime());
        assert_eq!(result, "Jan  8 10:30:45.123");
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert!(!format.is_valid());
        assert!(!TimestampFormat::Custom(String::new()).is_valid());
        assert!(TimestampFormat::Custom("%H:%M".to_string()).is_valid());
        assert!(TimestampFormat::Stamp.is_valid());
    }

    #[test]
    fn test_invalid_custom_pattern_falls_back_to_stamp() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert_eq!(format.format(&fixed_datetime()), "Jan  8 10:30:45.123");
    }

    #[test]
    fn test_stamp_two_digit_day() {
        let dt = Utc.with_ymd_and_hms(2025, 11, 23, 7, 5, 9).single().expect("valid datetime");
        assert_eq!(TimestampFormat::Stamp.format(&dt), "Nov 23 07:05:09.000");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123+00:00");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45"));
        assert!(result.ends_with("+00:00"));
    }

    #[test]
    fn test_unix_millis_format() {
        let result = TimestampFormat::UnixMillis.format(&fixed_datetime());
        assert_eq!(result, "1736332245123");
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_default_is_stamp() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Stamp);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::UnixMillis).expect("serialize");
        assert_eq!(json, "\"UnixMillis\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%H:%M"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%H:%M".to_string()));
    }
}
