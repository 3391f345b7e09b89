//! Runtime severity threshold and the verbose/release variant flag.

use crate::severity::Severity;
use std::sync::atomic::{AtomicU8, Ordering};

/// Selects the default thresholds of a logger.
///
/// `Verbose` corresponds to a debug build: Debug and Trace calls are live and
/// the file sink records from Debug up. `Release` drops Debug and Trace calls
/// entirely and the file sink records from Information up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildVariant {
    /// Debug build behavior: Debug and Trace are live.
    Verbose,
    /// Release build behavior: Debug and Trace calls are no-ops.
    Release,
}

impl BuildVariant {
    /// Maps the `verbose_build` flag to a variant.
    pub fn from_flag(verbose_build: bool) -> Self {
        if verbose_build {
            BuildVariant::Verbose
        } else {
            BuildVariant::Release
        }
    }

    /// Variant matching how this binary was compiled.
    pub fn current() -> Self {
        Self::from_flag(cfg!(debug_assertions))
    }

    /// True for [`BuildVariant::Verbose`].
    pub fn is_verbose(&self) -> bool {
        matches!(self, BuildVariant::Verbose)
    }

    /// Initial console threshold.
    pub fn default_minimum(&self) -> Severity {
        match self {
            BuildVariant::Verbose => Severity::Information,
            BuildVariant::Release => Severity::Warning,
        }
    }

    /// Threshold after `set_verbose`.
    pub fn raised_minimum(&self) -> Severity {
        match self {
            BuildVariant::Verbose => Severity::Trace,
            BuildVariant::Release => Severity::Information,
        }
    }

    /// Fixed threshold of file sinks.
    pub fn file_threshold(&self) -> Severity {
        match self {
            BuildVariant::Verbose => Severity::Debug,
            BuildVariant::Release => Severity::Information,
        }
    }
}

/// Mutable minimum severity shared between a logger and its console sink.
///
/// Reads and writes are relaxed: a record racing with `raise` may be filtered
/// against either threshold.
#[derive(Debug)]
pub struct MinimumLevelSwitch {
    variant: BuildVariant,
    minimum: AtomicU8,
}

impl MinimumLevelSwitch {
    /// Creates a switch at the variant's default threshold.
    pub fn new(variant: BuildVariant) -> Self {
        Self {
            variant,
            minimum: AtomicU8::new(variant.default_minimum() as u8),
        }
    }

    /// Variant the switch was created for.
    pub fn variant(&self) -> BuildVariant {
        self.variant
    }

    /// Current threshold.
    pub fn minimum(&self) -> Severity {
        Severity::from_u8(self.minimum.load(Ordering::Relaxed))
    }

    /// Lowers the threshold to the variant's raised level. Idempotent.
    pub fn raise(&self) {
        self.minimum
            .store(self.variant.raised_minimum() as u8, Ordering::Relaxed);
    }

    /// True if `severity` is at or above the current threshold.
    pub fn allows(&self, severity: Severity) -> bool {
        severity >= self.minimum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_defaults() {
        let switch = MinimumLevelSwitch::new(BuildVariant::Verbose);
        assert_eq!(switch.minimum(), Severity::Information);
        assert!(!switch.allows(Severity::Debug));

        switch.raise();
        assert_eq!(switch.minimum(), Severity::Trace);
        assert!(switch.allows(Severity::Trace));
    }

    #[test]
    fn test_release_defaults() {
        let switch = MinimumLevelSwitch::new(BuildVariant::Release);
        assert_eq!(switch.minimum(), Severity::Warning);
        assert!(!switch.allows(Severity::Information));

        switch.raise();
        assert_eq!(switch.minimum(), Severity::Information);
        assert!(!switch.allows(Severity::Debug));
    }

    #[test]
    fn test_raise_is_idempotent() {
        let switch = MinimumLevelSwitch::new(BuildVariant::Release);
        switch.raise();
        switch.raise();
        assert_eq!(switch.minimum(), Severity::Information);
    }

    #[test]
    fn test_file_thresholds() {
        assert_eq!(BuildVariant::Verbose.file_threshold(), Severity::Debug);
        assert_eq!(BuildVariant::Release.file_threshold(), Severity::Information);
        assert_eq!(BuildVariant::from_flag(true), BuildVariant::Verbose);
    }
}
