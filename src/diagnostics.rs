//! Diagnostics collected over one build
//!
//! Every stage of the pipeline records what it skipped or failed on here
//! instead of only writing to the log. The driver inspects the collected
//! entries once the run is over.

use std::path::{Path, PathBuf};

use crate::error::Error;

/// Severity of a recorded entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Excluded on purpose (e.g. not a Markdown file)
    Skipped,
    /// Something suspicious that did not stop the file or page
    Warning,
    /// A file or page could not be produced
    Failed,
}

/// One recorded event
#[derive(Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub path: PathBuf,
    pub message: String,
    /// The typed error behind a `Failed` entry
    pub error: Option<Error>,
}

/// Collector threaded through discovery, loading and emission
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file that was deliberately left out
    pub fn skipped(&mut self, path: &Path, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("Skipped {:?}: {}", path, message);
        self.entries.push(Diagnostic {
            severity: Severity::Skipped,
            path: path.to_path_buf(),
            message,
            error: None,
        });
    }

    pub fn warning(&mut self, path: &Path, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{:?}: {}", path, message);
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            path: path.to_path_buf(),
            message,
            error: None,
        });
    }

    /// Record a failure for a single file or page
    pub fn failed(&mut self, path: &Path, error: Error) {
        let message = error.to_string();
        tracing::error!("Failed {:?}: {}", path, message);
        self.entries.push(Diagnostic {
            severity: Severity::Failed,
            path: path.to_path_buf(),
            message,
            error: Some(error),
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Whether any file or page failed
    pub fn has_failures(&self) -> bool {
        self.count(Severity::Failed) > 0
    }

    /// Iterate over the typed errors of failed entries
    pub fn errors(&self) -> impl Iterator<Item = &Error> {
        self.entries.iter().filter_map(|d| d.error.as_ref())
    }

    /// One-line summary for the end of a run
    pub fn summary(&self) -> String {
        format!(
            "{} failed, {} warnings, {} skipped",
            self.count(Severity::Failed),
            self.count(Severity::Warning),
            self.count(Severity::Skipped)
        )
    }
}
