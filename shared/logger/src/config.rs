//! Startup configuration.

use crate::level_switch::BuildVariant;
use std::env;
use std::path::PathBuf;

/// Environment variable holding the log file path.
pub const ENV_PATH: &str = "LOGFACADE_PATH";
/// Environment variable selecting the verbose variant (`1` or `true`).
pub const ENV_VERBOSE: &str = "LOGFACADE_VERBOSE";
/// Environment variable disabling console output (`0` or `false`).
pub const ENV_CONSOLE: &str = "LOGFACADE_CONSOLE";

/// Settings read once when a logger starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeConfig {
    /// Category of the facade logger, usually the application name.
    pub name: String,
    /// Log file; `None` logs to the console only.
    pub path: Option<PathBuf>,
    /// Selects [`BuildVariant::Verbose`] over [`BuildVariant::Release`].
    pub verbose_build: bool,
    /// Whether records go to stdout.
    pub console: bool,
}

impl FacadeConfig {
    /// Console-only configuration whose variant follows the build profile.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            verbose_build: BuildVariant::current().is_verbose(),
            console: true,
        }
    }

    /// Also log to the file at `path`.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Selects the verbose (`true`) or release (`false`) variant.
    pub fn verbose(mut self, verbose_build: bool) -> Self {
        self.verbose_build = verbose_build;
        self
    }

    /// Turns off stdout output.
    pub fn without_console(mut self) -> Self {
        self.console = false;
        self
    }

    /// Variant selected by `verbose_build`.
    pub fn variant(&self) -> BuildVariant {
        BuildVariant::from_flag(self.verbose_build)
    }

    /// Builds a configuration from `LOGFACADE_*` environment variables,
    /// falling back to [`FacadeConfig::new`] for anything unset.
    pub fn from_env(name: impl Into<String>) -> Self {
        Self::from_lookup(name, |key| env::var(key).ok())
    }

    fn from_lookup<F>(name: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(name);

        if let Some(path) = lookup(ENV_PATH).filter(|p| !p.trim().is_empty()) {
            config.path = Some(PathBuf::from(path));
        }
        if let Some(flag) = lookup(ENV_VERBOSE).and_then(|v| parse_flag(&v)) {
            config.verbose_build = flag;
        }
        if let Some(flag) = lookup(ENV_CONSOLE).and_then(|v| parse_flag(&v)) {
            config.console = flag;
        }
        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
