//! Explicit logger context.

use crate::config::FacadeConfig;
use crate::console::ConsoleSink;
use crate::engine::{CategoryLogger, LoggerEngine};
use crate::error::{LoggingError, Result};
use crate::level_switch::{BuildVariant, MinimumLevelSwitch};
use crate::provider::FileSinkProvider;
use crate::severity::Severity;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// A configured logger: engine, category logger and level switch.
///
/// This is what the global facade holds while running; it can also be created
/// and passed around directly.
///
/// # Examples
///
/// ```no_run
/// use logfacade::{FacadeConfig, LoggerHandle};
///
/// let handle = LoggerHandle::new(&FacadeConfig::new("app").with_path("app.log")).unwrap();
/// handle.info(format_args!("listening on {}", 8080)).unwrap();
/// handle.shutdown();
/// ```
#[derive(Debug)]
pub struct LoggerHandle {
    engine: Arc<LoggerEngine>,
    logger: CategoryLogger,
    variant: BuildVariant,
}

impl LoggerHandle {
    /// Builds a logger writing to stdout and, if configured, to a file.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingError::Logging`] if the configured name is empty.
    pub fn new(config: &FacadeConfig) -> Result<Self> {
        let console = config.console.then(ConsoleSink::stdout);
        Self::build(config, console)
    }

    /// Like [`LoggerHandle::new`] but console output goes to `writer`.
    pub fn with_console_writer<W: Write + Send + 'static>(
        config: &FacadeConfig,
        writer: W,
    ) -> Result<Self> {
        Self::build(config, Some(ConsoleSink::with_writer(writer)))
    }

    fn build(config: &FacadeConfig, console: Option<ConsoleSink>) -> Result<Self> {
        if config.name.trim().is_empty() {
            return Err(LoggingError::Logging("logger name must not be empty".to_string()));
        }
        let variant = config.variant();
        let switch = Arc::new(MinimumLevelSwitch::new(variant));
        let files = config
            .path
            .as_ref()
            .map(|path| FileSinkProvider::new(path.clone(), variant.file_threshold()));

        let engine = Arc::new(LoggerEngine::new(switch, console, files));
        let logger = engine.create_logger(&config.name);
        Ok(Self {
            engine,
            logger,
            variant,
        })
    }

    pub fn name(&self) -> &str {
        self.logger.category()
    }

    pub fn variant(&self) -> BuildVariant {
        self.variant
    }

    /// Current console threshold.
    pub fn minimum_level(&self) -> Severity {
        self.engine.switch().minimum()
    }

    pub fn engine(&self) -> &Arc<LoggerEngine> {
        &self.engine
    }

    /// Logs at `severity`. Debug and Trace are dropped in the release variant.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) -> Result<()> {
        if severity < Severity::Information && !self.variant.is_verbose() {
            return Ok(());
        }
        self.logger.log(severity, None, args)
    }

    pub fn trace(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Trace, args)
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Debug, args)
    }

    pub fn info(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Information, args)
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Warning, args)
    }

    pub fn error(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Error, args)
    }

    pub fn critical(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Critical, args)
    }

    /// Logs at Critical, flushes, and exits the process with `code`.
    pub fn fatal(&self, code: i32, args: fmt::Arguments<'_>) -> ! {
        if let Err(e) = self.critical(args) {
            eprintln!("logfacade: failed to write log record: {}", e);
        }
        self.engine.dispose();
        std::process::exit(code)
    }

    /// Raises the console threshold: Trace in verbose, Information in release.
    pub fn set_verbose(&self) {
        self.engine.switch().raise();
    }

    /// Releases the engine's sinks. Later records reopen their files as needed.
    pub fn shutdown(&self) {
        self.engine.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::tests::SharedBuffer;
    use std::fs;
    use tempfile::tempdir;

    fn handle(verbose: bool, console: &SharedBuffer) -> LoggerHandle {
        let config = FacadeConfig::new("app").verbose(verbose);
        LoggerHandle::with_console_writer(&config, console.clone()).unwrap()
    }

    #[test]
    fn test_rejects_empty_name() {
        let result = LoggerHandle::new(&FacadeConfig::new(" ").without_console());
        assert!(matches!(result, Err(LoggingError::Logging(_))));
    }

    #[test]
    fn test_release_thresholds() {
        let console = SharedBuffer::default();
        let handle = handle(false, &console);

        assert_eq!(handle.minimum_level(), Severity::Warning);
        handle.info(format_args!("quiet")).unwrap();
        handle.warn(format_args!("loud")).unwrap();

        let out = console.contents();
        assert!(!out.contains("quiet"));
        assert!(out.contains("warn: app loud"));
    }

    #[test]
    fn test_set_verbose_debug_in_verbose_variant() {
        let console = SharedBuffer::default();
        let handle = handle(true, &console);

        handle.debug(format_args!("before")).unwrap();
        handle.set_verbose();
        assert_eq!(handle.minimum_level(), Severity::Trace);
        handle.debug(format_args!("after")).unwrap();
        handle.trace(format_args!("steps")).unwrap();

        let out = console.contents();
        assert!(!out.contains("before"));
        assert!(out.contains("dbug: app after"));
        assert!(out.contains("trce: app steps"));
    }

    #[test]
    fn test_set_verbose_debug_in_release_variant() {
        let console = SharedBuffer::default();
        let handle = handle(false, &console);

        handle.set_verbose();
        assert_eq!(handle.minimum_level(), Severity::Information);
        handle.debug(format_args!("never")).unwrap();
        handle.trace(format_args!("never")).unwrap();
        handle.info(format_args!("now visible")).unwrap();

        let out = console.contents();
        assert!(!out.contains("never"));
        assert!(out.contains("info: app now visible"));
    }

    #[test]
    fn test_release_debug_never_reaches_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("app.log");
        let config = FacadeConfig::new("app")
            .verbose(false)
            .with_path(&log_path)
            .without_console();
        let handle = LoggerHandle::new(&config).unwrap();

        handle.set_verbose();
        handle.debug(format_args!("dropped")).unwrap();
        handle.info(format_args!("kept {}", 1)).unwrap();

        let content = fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.starts_with("Information "));
        assert!(content.trim_end().ends_with(": kept 1"));
    }

    #[test]
    fn test_verbose_debug_reaches_file_before_set_verbose() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("app.log");
        let config = FacadeConfig::new("app")
            .verbose(true)
            .with_path(&log_path)
            .without_console();
        let handle = LoggerHandle::new(&config).unwrap();

        handle.debug(format_args!("file only")).unwrap();
        handle.trace(format_args!("below file threshold")).unwrap();

        let content = fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.starts_with("Debug "));
    }
}
