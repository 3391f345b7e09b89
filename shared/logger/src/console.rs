//! Single-line console output.

use crate::error::Result;
use crate::record::LogRecord;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

/// Writes one timestamped line per record to stdout or any other writer.
///
/// Filtering is done by the engine; the sink writes whatever it is given.
pub struct ConsoleSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Console sink writing to `writer`, typically a buffer in tests.
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    pub(crate) fn write(&self, record: &LogRecord<'_>) -> Result<()> {
        let mut out = self.out();
        out.write_all(record.console_line().as_bytes())?;
        out.flush()?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.out().flush()?;
        Ok(())
    }

    fn out(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}
