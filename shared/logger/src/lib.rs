//! Process-wide logging facade with console and file sinks.

pub mod config;
mod console;
pub mod engine;
pub mod error;
pub mod facade;
mod file_sink;
mod handle;
mod level_switch;
mod provider;
mod record;
mod severity;

pub use config::FacadeConfig;
pub use console::ConsoleSink;
pub use engine::{CategoryLogger, LoggerEngine};
pub use error::{LoggingError, Result};
pub use facade::{
    install_log_bridge, is_running, set_verbose, shutdown, startup, startup_with, try_log,
};
pub use file_sink::FileSink;
pub use handle::LoggerHandle;
pub use level_switch::{BuildVariant, MinimumLevelSwitch};
pub use provider::FileSinkProvider;
pub use record::TIMESTAMP_FORMAT;
pub use severity::Severity;
