//! Error types for the build pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading posts and emitting pages
#[derive(Error, Debug)]
pub enum Error {
    /// A required top-level directory is absent. Aborts the whole run.
    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// The source file name does not start with a valid `YYYY-MM-DD` date.
    #[error("Malformed filename {}: {reason}", path.display())]
    MalformedFilename { path: PathBuf, reason: String },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A named template could not be loaded or executed.
    #[error("Template error in '{name}': {message}")]
    Template { name: String, message: String },

    /// Front matter was opened with `---` but never closed.
    #[error("Front matter is missing its closing `---`")]
    UnclosedFrontMatter,

    /// Not a Markdown source. Informational only, never fatal.
    #[error("Unsupported file type: {}", path.display())]
    UnsupportedFileType { path: PathBuf },
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
