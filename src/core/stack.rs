//! Stack trace capture used by the fatal-level helpers

use std::backtrace::Backtrace;
use std::fmt::Write;
use std::thread;

/// Starting capacity of the trace buffer; it grows until the whole trace fits.
pub const STACK_BUFFER_SIZE: usize = 8192;

/// Source of the calling thread's stack trace as text
pub trait StackCapture: Send + Sync {
    fn capture(&self) -> String;
}

/// Captures the current thread's backtrace regardless of `RUST_BACKTRACE`
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceCapture;

impl StackCapture for BacktraceCapture {
    fn capture(&self) -> String {
        let backtrace = Backtrace::force_capture();
        let current = thread::current();

        let mut buf = String::with_capacity(STACK_BUFFER_SIZE);
        let _ = write!(
            buf,
            "thread '{}' [running]:\n{}",
            current.name().unwrap_or("<unnamed>"),
            backtrace
        );
        buf
    }
}

impl<F> StackCapture for F
where
    F: Fn() -> String + Send + Sync,
{
    fn capture(&self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtrace_capture_names_thread() {
        let trace = thread::Builder::new()
            .name("capture-test".to_string())
            .spawn(|| BacktraceCapture.capture())
            .unwrap()
            .join()
            .unwrap();

        assert!(trace.starts_with("thread 'capture-test' [running]:"));
        assert!(trace.len() > "thread 'capture-test' [running]:".len());
    }

    #[test]
    fn test_closure_capture() {
        let capture = || "fixed trace".to_string();
        assert_eq!(StackCapture::capture(&capture), "fixed trace");
    }
}
