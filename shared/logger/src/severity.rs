use crate::error::LoggingError;
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// Ordered from lowest to highest: Trace < Debug < Information < Warning < Error < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Step-by-step diagnostics, the most verbose level.
    Trace = 0,
    /// Debugging information.
    Debug = 1,
    /// Normal operational messages.
    Information = 2,
    /// Something unexpected that the program recovered from.
    Warning = 3,
    /// A failed operation.
    Error = 4,
    /// An unrecoverable failure, logged right before the process exits.
    Critical = 5,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Information,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Returns the name written to log files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "Trace",
            Severity::Debug => "Debug",
            Severity::Information => "Information",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Critical => "Critical",
        }
    }

    /// Returns the four-letter tag used on the console.
    pub fn short_name(&self) -> &'static str {
        match self {
            Severity::Trace => "trce",
            Severity::Debug => "dbug",
            Severity::Information => "info",
            Severity::Warning => "warn",
            Severity::Error => "fail",
            Severity::Critical => "crit",
        }
    }

    pub(crate) fn from_u8(value: u8) -> Severity {
        match value {
            0 => Severity::Trace,
            1 => Severity::Debug,
            2 => Severity::Information,
            3 => Severity::Warning,
            4 => Severity::Error,
            _ => Severity::Critical,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggingError;

    /// Parses a severity from a string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" | "trce" => Ok(Severity::Trace),
            "debug" | "dbug" => Ok(Severity::Debug),
            "information" | "info" => Ok(Severity::Information),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" | "fail" => Ok(Severity::Error),
            "critical" | "crit" | "fatal" => Ok(Severity::Critical),
            _ => Err(LoggingError::InvalidSeverity(s.to_string())),
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Information,
            log::Level::Debug => Severity::Debug,
            log::Level::Trace => Severity::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Debug);
        assert!(Severity::Debug < Severity::Information);
        assert!(Severity::Information < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn test_severity_as_str() {
        assert_eq!(Severity::Information.as_str(), "Information");
        assert_eq!(Severity::Critical.to_string(), "Critical");
        assert_eq!(Severity::Error.short_name(), "fail");
    }

    #[test]
    fn test_severity_from_str_case_insensitive() {
        assert_eq!("TRACE".parse::<Severity>().unwrap(), Severity::Trace);
        assert_eq!("InFo".parse::<Severity>().unwrap(), Severity::Information);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("fatal".parse::<Severity>().unwrap(), Severity::Critical);
    }

    #[test]
    fn test_severity_from_str_rejects_unknown() {
        assert!(matches!(
            "loud".parse::<Severity>(),
            Err(LoggingError::InvalidSeverity(_))
        ));
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn test_u8_roundtrip_covers_all() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_u8(severity as u8), severity);
        }
    }

    #[test]
    fn test_from_log_level() {
        assert_eq!(Severity::from(log::Level::Warn), Severity::Warning);
        assert_eq!(Severity::from(log::Level::Trace), Severity::Trace);
    }
}
