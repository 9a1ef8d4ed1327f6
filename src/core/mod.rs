//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod error_hook;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod stack;
pub mod timestamp;

pub use appender::Appender;
pub use config::{LoggerConfig, DEFAULT_QUEUE_CAPACITY};
pub use error::{LoggerError, Result};
pub use error_hook::{noop_error_hook, stderr_error_hook, ErrorHook};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
pub use stack::{BacktraceCapture, StackCapture, STACK_BUFFER_SIZE};
pub use timestamp::{TimestampFormat, STAMP_PATTERN};
