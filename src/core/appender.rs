//! Appender trait for the logger's output sinks

use super::{error::Result, log_entry::LogEntry};

/// A sink the worker writes rendered lines to
///
/// Appenders are only touched by the worker thread, under the write lock.
pub trait Appender: Send + Sync {
    /// Write the entry's line followed by a newline
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    /// Short name carried by write errors
    fn name(&self) -> &'static str;
}
