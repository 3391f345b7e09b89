//! Per-call log record.

use crate::severity::Severity;
use chrono::{DateTime, Local};

/// Timestamp layout shared by file and console output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[cfg(windows)]
pub(crate) const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub(crate) const LINE_ENDING: &str = "\n";

/// A single log record, built per call and dropped once written.
#[derive(Debug, Clone)]
pub(crate) struct LogRecord<'a> {
    pub severity: Severity,
    pub timestamp: DateTime<Local>,
    pub category: &'a str,
    pub message: String,
}

impl<'a> LogRecord<'a> {
    /// Creates a new record stamped with the current local time.
    pub fn new(severity: Severity, category: &'a str, message: String) -> Self {
        Self {
            severity,
            timestamp: Local::now(),
            category,
            message,
        }
    }

    /// Formats the record for file output: `Severity timestamp: message\n`
    pub fn file_line(&self) -> String {
        format!(
            "{} {}: {}{}",
            self.severity.as_str(),
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message,
            LINE_ENDING
        )
    }

    /// Formats the record for the console: `timestamp tag: category message\n`
    pub fn console_line(&self) -> String {
        format!(
            "{} {}: {} {}{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.severity.short_name(),
            self.category,
            self.message,
            LINE_ENDING
        )
    }
}
