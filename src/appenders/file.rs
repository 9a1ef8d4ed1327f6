//! File appender implementation

use crate::core::{Appender, LogEntry, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Permission bits for a newly created log file (before umask)
#[cfg(unix)]
pub const FILE_MODE: u32 = 0o666;

/// Unbuffered appender for the logger's single destination file
///
/// Every line goes to the OS in one `write_all` call. The handle is
/// released by [`FileAppender::close`] or on drop.
pub struct FileAppender {
    path: PathBuf,
    file: Option<File>,
}

impl FileAppender {
    /// Open `path` for read/write, creating it if absent and appending
    /// to any existing content
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let mut options = OpenOptions::new();
        options.read(true).create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let file = options
            .open(&path)
            .map_err(|source| LoggerError::open(path.clone(), source))?;

        Ok(Self {
            path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Release the file handle; later appends fail
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush().map_err(|e| LoggerError::write(self.name(), e))?;
        }
        Ok(())
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let file = self.file.as_mut().ok_or(LoggerError::LoggerStopped)?;

        let mut output = String::with_capacity(entry.line.len() + 1);
        output.push_str(&entry.line);
        output.push('\n');

        file.write_all(output.as_bytes())
            .map_err(|e| LoggerError::write(self.name(), e))
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut file) = self.file {
            file.flush().map_err(|e| LoggerError::write(self.name(), e))?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
