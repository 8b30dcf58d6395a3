//! Error types for persisting rendered output.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors that can occur while writing a robots.txt file.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Target directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Target directory is not writable: {0}")]
    DirectoryNotWritable(PathBuf),

    #[error("Target path is not a file: {0}")]
    NotAFile(PathBuf),

    #[error("Target file is not writable: {0}")]
    FileNotWritable(PathBuf),

    #[error("Sink rejected content: {0}")]
    Rejected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
