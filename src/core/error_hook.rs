//! Hook for write failures the worker would otherwise swallow
//!
//! Logging calls never surface downstream failures to the caller. Each
//! failed file or console write is instead handed to an [`ErrorHook`].
//! The default hook does nothing.
//!
//! # Example
//!
//! ```
//! use async_file_logger::{ErrorHook, LoggerError};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! let failures = Arc::new(AtomicU64::new(0));
//! let counter = Arc::clone(&failures);
//! let hook: ErrorHook = Arc::new(move |_err: &LoggerError| {
//!     counter.fetch_add(1, Ordering::Relaxed);
//! });
//! ```

use super::error::LoggerError;
use std::sync::Arc;

/// Callback type for swallowed write errors
///
/// Runs on the worker thread after the write lock is released, so it may
/// query the logger. Entries it logs are dropped and counted as rejected:
/// the worker cannot take its own hand-off.
pub type ErrorHook = Arc<dyn Fn(&LoggerError) + Send + Sync>;

/// Hook that discards every error
pub fn noop_error_hook() -> ErrorHook {
    Arc::new(|_: &LoggerError| {})
}

/// Hook that reports every error on stderr
pub fn stderr_error_hook() -> ErrorHook {
    Arc::new(|err: &LoggerError| eprintln!("[LOGGER ERROR] {}", err))
}
