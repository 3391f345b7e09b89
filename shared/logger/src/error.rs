//! Error types for logging operations.

use std::fmt;
use std::io;

/// Result type for logging operations.
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Errors that can occur during logging.
#[derive(Debug)]
pub enum LoggingError {
    /// I/O error from file operations.
    Io(io::Error),
    /// `startup` was called while a logger is already running.
    AlreadyStarted,
    /// The `log` crate bridge was already installed for this process.
    BridgeInstalled,
    /// A severity name that could not be parsed.
    InvalidSeverity(String),
    /// General logging error.
    Logging(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::Io(err) => write!(f, "I/O error: {}", err),
            LoggingError::AlreadyStarted => write!(f, "Logger already started"),
            LoggingError::BridgeInstalled => write!(f, "Log bridge already installed"),
            LoggingError::InvalidSeverity(name) => write!(f, "Invalid severity: {}", name),
            LoggingError::Logging(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoggingError {
    fn from(err: io::Error) -> Self {
        LoggingError::Io(err)
    }
}

impl From<log::SetLoggerError> for LoggingError {
    fn from(_: log::SetLoggerError) -> Self {
        LoggingError::BridgeInstalled
    }
}
