//! # Async File Logger
//!
//! An asynchronous, leveled logger that writes to a single file.
//!
//! Callers on any thread submit severity-tagged messages; one dedicated
//! worker thread writes them, in hand-off order, to the destination file
//! and optionally echoes them to standard output.
//!
//! ## Features
//!
//! - **Non-interleaved output**: every accepted call becomes exactly one line
//! - **Level filtering** by ordinal before any formatting work
//! - **Explicit lifecycle**: `stop`, `shutdown` and release of the file on drop
//! - **Silent by default**: write failures go to a pluggable error hook
//!
//! ```no_run
//! use async_file_logger::prelude::*;
//! use async_file_logger::{info, warn};
//!
//! let logger = Logger::open("app.log", LogLevel::Undefined, 0, true)?;
//! info!(logger, "listening on port {}", 8080);
//! warn!(logger, "cache at {}% capacity", 91);
//! logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        noop_error_hook, stderr_error_hook, Appender, BacktraceCapture, ErrorHook, LogEntry,
        LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result,
        StackCapture, TimestampFormat, DEFAULT_SHUTDOWN_TIMEOUT,
    };
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    noop_error_hook, stderr_error_hook, Appender, BacktraceCapture, ErrorHook, LogEntry, LogLevel,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, StackCapture,
    TimestampFormat, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT, STACK_BUFFER_SIZE,
    STAMP_PATTERN,
};
