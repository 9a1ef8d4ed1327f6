//! Console appender implementation

use crate::core::{Appender, LogEntry, LoggerError, Result};
use std::io::{self, Write};

/// Echoes the exact file line to standard output
#[derive(Debug, Default)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", entry.line).map_err(|e| LoggerError::write(self.name(), e))
    }

    fn flush(&mut self) -> Result<()> {
        io::stdout()
            .flush()
            .map_err(|e| LoggerError::write(self.name(), e))
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
