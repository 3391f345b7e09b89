//! Process-wide logger.
//!
//! The facade is either uninitialized, where every call is a silent no-op, or
//! running one [`LoggerHandle`] created by [`startup`]. [`shutdown`] returns it
//! to the uninitialized state.
//!
//! ```no_run
//! logfacade::startup_with("app", Some(std::path::Path::new("/tmp/app.log"))).unwrap();
//! logfacade::info!("listening on {}", 8080);
//! logfacade::shutdown();
//! ```

use crate::config::FacadeConfig;
use crate::error::{LoggingError, Result};
use crate::handle::LoggerHandle;
use crate::severity::Severity;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

// Guards are held only to swap or clone the handle; formatting and sink I/O run
// unlocked, so a `Display` impl may log or shut the facade down itself.
static STATE: RwLock<Option<Arc<LoggerHandle>>> = RwLock::new(None);

static BRIDGE: LogBridge = LogBridge;

fn current() -> Option<Arc<LoggerHandle>> {
    STATE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

fn state_mut() -> RwLockWriteGuard<'static, Option<Arc<LoggerHandle>>> {
    STATE.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Starts the global logger.
///
/// # Errors
///
/// Returns [`LoggingError::AlreadyStarted`] if a logger is running; the running
/// logger is kept. Fails as [`LoggerHandle::new`] does for a bad configuration.
pub fn startup(config: FacadeConfig) -> Result<()> {
    let mut state = state_mut();
    if state.is_some() {
        return Err(LoggingError::AlreadyStarted);
    }
    *state = Some(Arc::new(LoggerHandle::new(&config)?));
    Ok(())
}

/// Starts the global logger with default settings for `name`, logging to
/// `path` as well as the console when given.
pub fn startup_with(name: &str, path: Option<&Path>) -> Result<()> {
    let config = FacadeConfig::new(name);
    match path {
        Some(path) => startup(config.with_path(path)),
        None => startup(config),
    }
}

/// Disposes the running logger. No-op when nothing is running.
///
/// Records already being written by other threads finish on the old sinks.
pub fn shutdown() {
    let handle = state_mut().take();
    if let Some(handle) = handle {
        handle.shutdown();
    }
}

/// Whether a logger is running.
pub fn is_running() -> bool {
    current().is_some()
}

/// Raises the running logger's threshold.
pub fn set_verbose() {
    if let Some(handle) = current() {
        handle.set_verbose();
    }
}

/// Logs at `severity`, returning sink errors to the caller.
pub fn try_log(severity: Severity, args: fmt::Arguments<'_>) -> Result<()> {
    match current() {
        Some(handle) => handle.log(severity, args),
        None => Ok(()),
    }
}

fn log_or_report(severity: Severity, args: fmt::Arguments<'_>) {
    if let Err(e) = try_log(severity, args) {
        eprintln!("logfacade: failed to write log record: {}", e);
    }
}

/// Logs at Trace. Dropped unless the running logger is verbose.
pub fn trace(args: fmt::Arguments<'_>) {
    log_or_report(Severity::Trace, args);
}

/// Logs at Debug. Dropped unless the running logger is verbose.
pub fn debug(args: fmt::Arguments<'_>) {
    log_or_report(Severity::Debug, args);
}

/// Logs at Information.
pub fn info(args: fmt::Arguments<'_>) {
    log_or_report(Severity::Information, args);
}

/// Logs at Warning.
pub fn warn(args: fmt::Arguments<'_>) {
    log_or_report(Severity::Warning, args);
}

/// Logs at Error.
pub fn error(args: fmt::Arguments<'_>) {
    log_or_report(Severity::Error, args);
}

/// Logs at Critical and exits the process with `code`, running or not.
pub fn fatal(code: i32, args: fmt::Arguments<'_>) -> ! {
    log_or_report(Severity::Critical, args);
    shutdown();
    std::process::exit(code)
}

/// Routes records from the `log` crate macros to the running logger.
///
/// # Errors
///
/// Returns [`LoggingError::BridgeInstalled`] if a `log` logger is already set.
pub fn install_log_bridge() -> Result<()> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

struct LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        current().is_some_and(|handle| log::Log::enabled(handle.engine().as_ref(), metadata))
    }

    fn log(&self, record: &log::Record<'_>) {
        if let Some(handle) = current() {
            log::Log::log(handle.engine().as_ref(), record);
        }
    }

    fn flush(&self) {
        if let Some(handle) = current() {
            log::Log::flush(handle.engine().as_ref());
        }
    }
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::facade::trace(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::facade::debug(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::facade::info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::facade::warn(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::facade::error(format_args!($($arg)*))
    };
}

/// Logs at Critical and exits: `fatal!(code, "message {}", arg)`.
#[macro_export]
macro_rules! fatal {
    ($code:expr, $($arg:tt)*) => {
        $crate::facade::fatal($code, format_args!($($arg)*))
    };
}
