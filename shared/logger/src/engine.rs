//! Multi-sink engine and the per-category loggers it creates.

use crate::console::ConsoleSink;
use crate::error::Result;
use crate::file_sink::FileSink;
use crate::level_switch::MinimumLevelSwitch;
use crate::provider::FileSinkProvider;
use crate::record::LogRecord;
use crate::severity::Severity;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Routes records to the console and, optionally, to file sinks.
///
/// The engine itself captures every severity; each sink applies its own filter. The console follows the shared
/// [`MinimumLevelSwitch`], file sinks their fixed threshold.
#[derive(Debug)]
pub struct LoggerEngine {
    switch: Arc<MinimumLevelSwitch>,
    console: Option<ConsoleSink>,
    files: Option<FileSinkProvider>,
}

impl LoggerEngine {
    /// Lowest severity the engine captures. Informational: it is the lowest
    /// severity, so filtering is left entirely to the sinks.
    pub const CAPTURE_LEVEL: Severity = Severity::Trace;

    pub fn new(
        switch: Arc<MinimumLevelSwitch>,
        console: Option<ConsoleSink>,
        files: Option<FileSinkProvider>,
    ) -> Self {
        Self {
            switch,
            console,
            files,
        }
    }

    pub fn switch(&self) -> &Arc<MinimumLevelSwitch> {
        &self.switch
    }

    pub fn files(&self) -> Option<&FileSinkProvider> {
        self.files.as_ref()
    }

    /// Creates a logger for `category`, backed by the category's file sink.
    pub fn create_logger(self: &Arc<Self>, category: &str) -> CategoryLogger {
        CategoryLogger {
            engine: Arc::clone(self),
            category: category.to_string(),
            file: self.files.as_ref().map(|files| files.create_or_get(category)),
        }
    }

    /// Releases cached sinks and flushes the console.
    pub fn dispose(&self) {
        if let Some(files) = &self.files {
            files.clear();
        }
        if let Some(console) = &self.console {
            let _ = console.flush();
        }
    }

    fn console_enabled(&self, severity: Severity) -> bool {
        self.console.is_some() && self.switch.allows(severity)
    }

    fn dispatch(
        &self,
        category: &str,
        file: Option<&FileSink>,
        severity: Severity,
        error: Option<&dyn Error>,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        let to_console = self.console_enabled(severity);
        let to_file = file.is_some_and(|f| f.is_enabled(severity));
        if !to_console && !to_file {
            return Ok(());
        }

        let message = render(args, error);
        let mut first_error = None;

        if let (true, Some(console)) = (to_console, &self.console) {
            let record = LogRecord::new(severity, category, message.clone());
            first_error = console.write(&record).err();
        }
        if let (true, Some(file)) = (to_file, file) {
            if let Err(err) = file.write(severity, error, |_| message) {
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn render(args: fmt::Arguments<'_>, error: Option<&dyn Error>) -> String {
    match error {
        Some(err) => format!("{}: {}", args, err),
        None => args.to_string(),
    }
}

impl log::Log for LoggerEngine {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        let severity = Severity::from(metadata.level());
        self.console_enabled(severity)
            || self
                .files
                .as_ref()
                .is_some_and(|files| severity >= files.threshold())
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let category = record.target();
        let file = self.files.as_ref().map(|files| files.create_or_get(category));
        let result = self.dispatch(
            category,
            file.as_deref(),
            Severity::from(record.level()),
            None,
            *record.args(),
        );
        if let Err(e) = result {
            eprintln!("logfacade: failed to write log record: {}", e);
        }
    }

    fn flush(&self) {
        if let Some(console) = &self.console {
            let _ = console.flush();
        }
    }
}

/// Logger bound to one category of a [`LoggerEngine`].
#[derive(Debug, Clone)]
pub struct CategoryLogger {
    engine: Arc<LoggerEngine>,
    category: String,
    file: Option<Arc<FileSink>>,
}

impl CategoryLogger {
    pub fn category(&self) -> &str {
        &self.category
    }

    /// True if at least one sink would record `severity`.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.engine.console_enabled(severity)
            || self.file.as_ref().is_some_and(|f| f.is_enabled(severity))
    }

    /// Sends one record to every sink that accepts `severity`.
    ///
    /// Both sinks are attempted; the first failure is returned.
    pub fn log(
        &self,
        severity: Severity,
        error: Option<&dyn Error>,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        self.engine
            .dispatch(&self.category, self.file.as_deref(), severity, error, args)
    }
}
