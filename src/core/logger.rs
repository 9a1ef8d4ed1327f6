//! Main logger implementation
//!
//! Any number of threads call [`Logger::log`]; exactly one worker thread
//! writes. Entries reach the worker through a hand-off channel that has no
//! capacity by default, so a log call returns once the worker has taken
//! the entry. The worker writes each entry to the file, and to stdout when
//! echo is enabled, under a single write lock.

use super::{
    appender::Appender,
    config::LoggerConfig,
    error::{LoggerError, Result},
    error_hook::{noop_error_hook, ErrorHook},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    stack::{BacktraceCapture, StackCapture},
    timestamp::TimestampFormat,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use crossbeam_channel::{bounded, select, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout for logger cleanup (5 seconds)
///
/// Used when the logger is dropped without an explicit `shutdown()`.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

const WORKER_THREAD_NAME: &str = "file-logger-worker";

/// The destination and its optional echo, written as one unit
struct Sinks {
    file: FileAppender,
    console: Option<ConsoleAppender>,
}

impl Sinks {
    /// Write one entry, returning the failures for the caller to report
    /// once the lock is released
    fn write(&mut self, entry: &LogEntry, metrics: &LoggerMetrics) -> Vec<LoggerError> {
        let mut failures = Vec::new();
        match self.file.append(entry) {
            Ok(()) => {
                metrics.record_written();
            }
            Err(e) => failures.push(e),
        }

        if let Some(ref mut console) = self.console {
            if let Err(e) = console.append(entry) {
                failures.push(e);
            }
        }
        failures
    }

    fn close(&mut self) -> Vec<LoggerError> {
        let mut failures = Vec::new();
        if let Some(ref mut console) = self.console {
            if let Err(e) = console.flush() {
                failures.push(e);
            }
        }
        if let Err(e) = self.file.close() {
            failures.push(e);
        }
        failures
    }
}

/// Count a swallowed failure and pass it to the hook
///
/// A panicking hook must not take the worker down with it.
fn report(err: LoggerError, metrics: &LoggerMetrics, error_hook: &ErrorHook) {
    metrics.record_write_failure();

    let hook_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| error_hook(&err)));
    if let Err(panic_info) = hook_result {
        let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!(
            "[LOGGER CRITICAL] Error hook panicked: {}. Worker continues.",
            panic_msg
        );
    }
}

/// State moved onto the worker thread
struct Worker {
    receiver: Receiver<LogEntry>,
    stop_receiver: Receiver<()>,
    sinks: Arc<Mutex<Sinks>>,
    metrics: Arc<LoggerMetrics>,
    error_hook: ErrorHook,
}

impl Worker {
    fn report_all(&self, failures: Vec<LoggerError>) {
        for err in failures {
            report(err, &self.metrics, &self.error_hook);
        }
    }

    fn run(self) {
        loop {
            select! {
                recv(self.receiver) -> msg => match msg {
                    Ok(entry) => {
                        let failures = self.sinks.lock().write(&entry, &self.metrics);
                        self.report_all(failures);
                    }
                    // Every sender is gone
                    Err(_) => break,
                },
                // A stop value or the stop channel closing
                recv(self.stop_receiver) -> _ => break,
            }
        }

        // Pending hand-offs are abandoned; dropping `receiver` on return
        // releases any producer still waiting on it.
        let failures = self.sinks.lock().close();
        self.report_all(failures);
    }
}

pub struct Logger {
    path: PathBuf,
    min_level: RwLock<LogLevel>,
    /// Carried for callers; no limit is enforced.
    max_records: u64,
    log_to_console: bool,
    timestamp_format: TimestampFormat,
    sender: Sender<LogEntry>,
    stop_sender: Mutex<Option<Sender<()>>>,
    worker_handle: Mutex<Option<thread::JoinHandle<()>>>,
    worker_id: thread::ThreadId,
    sinks: Arc<Mutex<Sinks>>,
    metrics: Arc<LoggerMetrics>,
    stack_capture: Arc<dyn StackCapture>,
}

impl Logger {
    /// Open `path` and start the writer thread
    ///
    /// # Example
    ///
    /// ```no_run
    /// use async_file_logger::{LogLevel, Logger};
    ///
    /// let logger = Logger::open("/var/log/app.log", LogLevel::Info, 0, false)?;
    /// logger.info("Server started");
    /// logger.stop();
    /// # Ok::<(), async_file_logger::LoggerError>(())
    /// ```
    pub fn open(
        path: impl Into<PathBuf>,
        min_level: LogLevel,
        max_records: u64,
        log_to_console: bool,
    ) -> Result<Self> {
        Self::builder(path)
            .min_level(min_level)
            .max_records(max_records)
            .log_to_console(log_to_console)
            .open()
    }

    /// Start a logger from a loaded configuration
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        LoggerBuilder::from_config(config).open()
    }

    fn start(
        config: LoggerConfig,
        error_hook: ErrorHook,
        stack_capture: Arc<dyn StackCapture>,
    ) -> Result<Self> {
        config.validate()?;

        let file = FileAppender::open(&config.path)?;
        let console = config.log_to_console.then(ConsoleAppender::new);
        let sinks = Arc::new(Mutex::new(Sinks { file, console }));
        let metrics = Arc::new(LoggerMetrics::new());

        let (sender, receiver) = bounded(config.queue_capacity);
        let (stop_sender, stop_receiver) = bounded(1);

        let worker = Worker {
            receiver,
            stop_receiver,
            sinks: Arc::clone(&sinks),
            metrics: Arc::clone(&metrics),
            error_hook,
        };

        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || worker.run())
            .map_err(|e| {
                LoggerError::io_operation("spawning log worker", "could not start writer thread", e)
            })?;

        let worker_id = handle.thread().id();

        Ok(Self {
            path: config.path,
            min_level: RwLock::new(config.min_level),
            max_records: config.max_records,
            log_to_console: config.log_to_console,
            timestamp_format: config.timestamp_format,
            sender,
            stop_sender: Mutex::new(Some(stop_sender)),
            worker_handle: Mutex::new(Some(handle)),
            worker_id,
            sinks,
            metrics,
            stack_capture,
        })
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```no_run
    /// use async_file_logger::prelude::*;
    ///
    /// let logger = Logger::builder("/var/log/app.log")
    ///     .min_level(LogLevel::Debug)
    ///     .log_to_console(true)
    ///     .error_hook(stderr_error_hook())
    ///     .open()?;
    /// # Ok::<(), LoggerError>(())
    /// ```
    #[must_use]
    pub fn builder(path: impl Into<PathBuf>) -> LoggerBuilder {
        LoggerBuilder::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn max_records(&self) -> u64 {
        self.max_records
    }

    pub fn logs_to_console(&self) -> bool {
        self.log_to_console
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Whether a message at `level` would be written
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.min_level())
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }
        self.submit(level, message.as_ref());
    }

    /// Log pre-formatted arguments; they are only rendered when `level` passes
    pub fn log_args(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }
        match args.as_str() {
            Some(message) => self.submit(level, message),
            None => self.submit(level, &args.to_string()),
        }
    }

    /// Hand one entry to the worker, blocking until it is taken
    fn submit(&self, level: LogLevel, message: &str) {
        // From the error hook: the worker cannot take its own hand-off
        if thread::current().id() == self.worker_id {
            self.metrics.record_rejected();
            return;
        }

        let entry = LogEntry::new(level, message, &self.timestamp_format);
        match self.sender.send(entry) {
            Ok(()) => {
                self.metrics.record_accepted();
            }
            Err(_) => {
                // Worker has exited
                self.metrics.record_rejected();
            }
        }
    }

    fn submit_stack_trace(&self) {
        if self.is_enabled(LogLevel::Fatal) {
            let trace = self.stack_capture.capture();
            self.submit(LogLevel::Fatal, &trace);
        }
    }

    /// Log at `Fatal`, followed by a second entry holding the caller's stack trace
    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Fatal, message);
        self.submit_stack_trace();
    }

    pub fn fatal_args(&self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Fatal, args);
        self.submit_stack_trace();
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    /// Get the logger metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Signal the worker to exit without waiting for it
    ///
    /// Entries not yet taken by the worker are lost. Only the first call
    /// sends the signal and closes the stop channel; later calls do nothing.
    pub fn stop(&self) {
        if let Some(stop_sender) = self.stop_sender.lock().take() {
            // Disconnected means the worker is already gone
            let _ = stop_sender.try_send(());
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stop_sender.lock().is_none()
    }

    /// Whether the destination file handle is still held
    pub fn is_file_open(&self) -> bool {
        self.sinks.lock().file.is_open()
    }

    /// Stop the worker and wait for it to release the file
    ///
    /// # Returns
    ///
    /// `true` if the worker exited within `timeout`, `false` otherwise
    ///
    /// # Example
    ///
    /// ```no_run
    /// use async_file_logger::{LogLevel, Logger};
    /// use std::time::Duration;
    ///
    /// let logger = Logger::open("app.log", LogLevel::Debug, 0, false)?;
    /// logger.info("Important message");
    ///
    /// if !logger.shutdown(Duration::from_secs(10)) {
    ///     eprintln!("Warning: Logger shutdown timed out");
    /// }
    /// # Ok::<(), async_file_logger::LoggerError>(())
    /// ```
    pub fn shutdown(&self, timeout: Duration) -> bool {
        self.stop();

        let Some(handle) = self.worker_handle.lock().take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[LOGGER ERROR] Log worker thread panicked during shutdown: {:?}", e);
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Log worker thread did not finish within {:?}. \
                     The log file stays open until it does.",
                    timeout
                );
                return false;
            }

            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("path", &self.path)
            .field("min_level", &self.min_level())
            .field("max_records", &self.max_records)
            .field("log_to_console", &self.log_to_console)
            .field("timestamp_format", &self.timestamp_format)
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use async_file_logger::prelude::*;
///
/// let logger = Logger::builder("app.log")
///     .min_level(LogLevel::Debug)
///     .max_records(10_000)
///     .timestamp_format(TimestampFormat::Iso8601)
///     .stack_capture(|| "custom trace".to_string())
///     .open()?;
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    error_hook: ErrorHook,
    stack_capture: Arc<dyn StackCapture>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::from_config(LoggerConfig::new(path))
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            error_hook: noop_error_hook(),
            stack_capture: Arc::new(BacktraceCapture),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_records(mut self, max_records: u64) -> Self {
        self.config.max_records = max_records;
        self
    }

    /// Echo every line to standard output
    #[must_use = "builder methods return a new value"]
    pub fn log_to_console(mut self, enabled: bool) -> Self {
        self.config.log_to_console = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    /// Let up to `capacity` entries wait for the worker instead of
    /// blocking each caller until the worker takes its entry
    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.config.queue_capacity = capacity;
        self
    }

    /// Set the callback for swallowed write errors
    #[must_use = "builder methods return a new value"]
    pub fn error_hook(mut self, hook: ErrorHook) -> Self {
        self.error_hook = hook;
        self
    }

    /// Replace the stack trace source used by `fatal`
    #[must_use = "builder methods return a new value"]
    pub fn stack_capture<S: StackCapture + 'static>(mut self, capture: S) -> Self {
        self.stack_capture = Arc::new(capture);
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Open the destination and start the worker
    pub fn open(self) -> Result<Logger> {
        Logger::start(self.config, self.error_hook, self.stack_capture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tempfile::TempDir;

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .expect("Failed to read log file")
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_builder_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let logger = Logger::builder(temp_dir.path().join("defaults.log"))
            .open()
            .expect("open");

        assert_eq!(logger.min_level(), LogLevel::Info);
        assert_eq!(logger.max_records(), 0);
        assert!(!logger.logs_to_console());
        assert_eq!(logger.timestamp_format(), &TimestampFormat::Stamp);
        assert!(logger.is_file_open());
        assert!(!logger.is_stopped());
    }

    #[test]
    fn test_open_failure_constructs_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("no_such_dir").join("app.log");

        let err = Logger::open(&path, LogLevel::Info, 0, false).unwrap_err();
        assert!(matches!(err, LoggerError::Open { .. }));
        assert!(err.to_string().contains("no_such_dir"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Logger::builder("").open().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let logger = Logger::open(temp_dir.path().join("stop.log"), LogLevel::Debug, 0, false)
            .expect("open");

        logger.stop();
        logger.stop();
        assert!(logger.is_stopped());
        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));
        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));
    }

    #[test]
    fn test_shutdown_closes_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let logger = Logger::open(temp_dir.path().join("close.log"), LogLevel::Debug, 0, false)
            .expect("open");

        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));
        assert!(!logger.is_file_open());
    }

    #[test]
    fn test_log_after_stop_is_rejected_not_blocked() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("after_stop.log");
        let logger = Logger::open(&path, LogLevel::Undefined, 0, false).expect("open");

        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));
        logger.info("too late");
        logger.fatal("also too late");

        assert_eq!(logger.metrics().accepted(), 0);
        assert_eq!(logger.metrics().rejected(), 3);
        assert!(read_lines(&path).is_empty());
    }

    #[test]
    fn test_filter_counts() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("filter.log");
        let logger = Logger::open(&path, LogLevel::Info, 0, false).expect("open");

        logger.debug("kept");
        logger.info("kept");
        logger.warn("dropped");
        logger.error("dropped");

        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));
        assert_eq!(logger.metrics().accepted(), 2);
        assert_eq!(logger.metrics().filtered(), 2);
        assert_eq!(logger.metrics().written(), 2);
        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_set_min_level() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("set_level.log");
        let logger = Logger::open(&path, LogLevel::Undefined, 0, false).expect("open");

        logger.warn("visible");
        logger.set_min_level(LogLevel::Debug);
        assert!(logger.is_enabled(LogLevel::Debug));
        assert!(!logger.is_enabled(LogLevel::Info));
        logger.info("hidden");

        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));
        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" visible"));
    }

    #[test]
    fn test_fatal_uses_stack_capture() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("fatal.log");
        let logger = Logger::builder(&path)
            .min_level(LogLevel::Undefined)
            .timestamp_format(TimestampFormat::UnixMillis)
            .stack_capture(|| "frame one\nframe two".to_string())
            .open()
            .expect("open");

        logger.fatal_args(format_args!("disk {} failed", "sda"));
        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" disk sda failed"));
        assert!(lines[1].ends_with(" frame one\\nframe two"));
    }

    #[test]
    fn test_fatal_filtered_skips_stack_capture() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let captures = Arc::new(AtomicU64::new(0));
        let captures_clone = Arc::clone(&captures);

        let logger = Logger::builder(temp_dir.path().join("fatal_filtered.log"))
            .min_level(LogLevel::Error)
            .stack_capture(move || {
                captures_clone.fetch_add(1, Ordering::Relaxed);
                String::new()
            })
            .open()
            .expect("open");

        logger.fatal("dropped by ordinal");
        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));
        assert_eq!(captures.load(Ordering::Relaxed), 0);
        assert_eq!(logger.metrics().accepted(), 0);
    }

    #[test]
    fn test_queue_capacity_keeps_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("buffered.log");
        let logger = Logger::builder(&path)
            .min_level(LogLevel::Undefined)
            .queue_capacity(8)
            .timestamp_format(TimestampFormat::UnixMillis)
            .open()
            .expect("open");

        for i in 0..5 {
            logger.info(format!("Message {}", i));
        }

        // Buffered entries are only guaranteed once the worker has taken them
        let deadline = Instant::now() + DEFAULT_SHUTDOWN_TIMEOUT;
        while logger.metrics().written() < 5 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));

        let messages: Vec<String> = read_lines(&path)
            .iter()
            .map(|line| line.split_once(' ').expect("timestamp prefix").1.to_string())
            .collect();
        let expected: Vec<String> = (0..5).map(|i| format!("Message {}", i)).collect();
        assert_eq!(messages, expected);
    }

    #[test]
    fn test_debug_format() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let logger = Logger::open(temp_dir.path().join("debug.log"), LogLevel::Warn, 7, false)
            .expect("open");

        let rendered = format!("{:?}", logger);
        assert!(rendered.contains("min_level: Warn"));
        assert!(rendered.contains("max_records: 7"));
    }
}
