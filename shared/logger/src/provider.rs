//! Per-category registry of file sinks.

use crate::file_sink::FileSink;
use crate::severity::Severity;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// Hands out one [`FileSink`] per category, all targeting the same file.
///
/// Sinks are created on first request and cached until [`clear`](Self::clear)
/// or drop.
#[derive(Debug)]
pub struct FileSinkProvider {
    path: PathBuf,
    threshold: Severity,
    sinks: Mutex<HashMap<String, Arc<FileSink>>>,
}

impl FileSinkProvider {
    pub fn new(path: impl Into<PathBuf>, threshold: Severity) -> Self {
        Self {
            path: path.into(),
            threshold,
            sinks: Mutex::new(HashMap::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Returns the sink cached for `category`, creating it if absent.
    ///
    /// Concurrent callers asking for the same category get the same sink.
    pub fn create_or_get(&self, category: &str) -> Arc<FileSink> {
        let mut sinks = self.sinks();
        if let Some(sink) = sinks.get(category) {
            return Arc::clone(sink);
        }
        let sink = Arc::new(FileSink::new(
            self.path.clone(),
            category.to_string(),
            self.threshold,
        ));
        sinks.insert(category.to_string(), Arc::clone(&sink));
        sink
    }

    /// Number of cached categories.
    pub fn len(&self) -> usize {
        self.sinks().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached sink.
    pub fn clear(&self) {
        self.sinks().clear();
    }

    fn sinks(&self) -> MutexGuard<'_, HashMap<String, Arc<FileSink>>> {
        self.sinks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for FileSinkProvider {
    fn drop(&mut self) {
        self.clear();
    }
}
