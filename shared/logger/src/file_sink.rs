//! Append-only file sink.

use crate::error::Result;
use crate::record::LogRecord;
use crate::severity::Severity;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Serializes every file append in the process, whatever the target path.
static FILE_LOCK: Mutex<()> = Mutex::new(());

/// Writes records for one category to a log file.
///
/// The file is opened, appended to and closed on every write, so a sink holds
/// no handle between calls.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    category: String,
    threshold: Severity,
}

impl FileSink {
    pub(crate) fn new(path: PathBuf, category: String, threshold: Severity) -> Self {
        Self {
            path,
            category,
            threshold,
        }
    }

    /// File the sink appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Category the sink was created for.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// True if `severity` is at or above the sink threshold.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    /// Formats and appends one record.
    ///
    /// `formatter` receives the optional error and renders the message. Nothing
    /// is formatted or written when `severity` is below the sink threshold.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingError::Io`](crate::LoggingError::Io) if the file cannot
    /// be opened or written.
    pub fn write<F>(&self, severity: Severity, error: Option<&dyn Error>, formatter: F) -> Result<()>
    where
        F: FnOnce(Option<&dyn Error>) -> String,
    {
        if !self.is_enabled(severity) {
            return Ok(());
        }

        let record = LogRecord::new(severity, &self.category, formatter(error));
        self.append(&record.file_line())
    }

    fn append(&self, line: &str) -> Result<()> {
        // A writer that panicked mid-append leaves nothing to repair.
        let _guard = FILE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
