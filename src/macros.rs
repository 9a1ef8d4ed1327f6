//! Logging macros for ergonomic log message formatting.
//!
//! These macros take a `format!`-style template and arguments. The
//! template is only expanded when the level passes the logger's filter.
//!
//! # Examples
//!
//! ```no_run
//! use async_file_logger::prelude::*;
//! use async_file_logger::info;
//!
//! let logger = Logger::open("app.log", LogLevel::Info, 0, false)?;
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```no_run
/// # use async_file_logger::prelude::*;
/// # let logger = Logger::open("app.log", LogLevel::Undefined, 0, false)?;
/// use async_file_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_args($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message followed by the caller's stack trace.
///
/// # Examples
///
/// ```no_run
/// # use async_file_logger::prelude::*;
/// # let logger = Logger::open("app.log", LogLevel::Undefined, 0, false)?;
/// use async_file_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_args(format_args!($($arg)+))
    };
}
