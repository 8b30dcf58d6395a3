//! File-backed sink.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{PersistenceError, PersistenceResult};
use crate::sink::RobotsSink;

/// Writes rendered content to a file on disk.
///
/// The target directory must already exist and be writable. An existing
/// target must be a regular, writable file; it is overwritten.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Default file name for robots directives.
    pub const DEFAULT_FILE_NAME: &'static str = "robots.txt";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A sink writing `robots.txt` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the target lives in. A bare file name resolves to `.`.
    fn target_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Check that the target can be written without touching it.
    pub fn check_writable(&self) -> PersistenceResult<()> {
        let dir = self.target_dir();

        let dir_meta = match fs::metadata(&dir) {
            Ok(meta) => meta,
            Err(_) => return Err(PersistenceError::DirectoryNotFound(dir)),
        };
        if !dir_meta.is_dir() {
            return Err(PersistenceError::DirectoryNotFound(dir));
        }
        // Mode bits alone miss ownership; a scratch file proves access.
        if dir_meta.permissions().readonly() || NamedTempFile::new_in(&dir).is_err() {
            return Err(PersistenceError::DirectoryNotWritable(dir));
        }

        if let Ok(meta) = fs::metadata(&self.path) {
            if !meta.is_file() {
                return Err(PersistenceError::NotAFile(self.path.clone()));
            }
            let opened = OpenOptions::new().write(true).open(&self.path);
            if meta.permissions().readonly() || opened.is_err() {
                return Err(PersistenceError::FileNotWritable(self.path.clone()));
            }
            warn!("Overwriting existing file {:?}", self.path);
        }

        Ok(())
    }
}

impl RobotsSink for FileSink {
    fn persist(&self, content: &str) -> PersistenceResult<()> {
        self.check_writable()?;

        let mut data = String::with_capacity(content.len() + 1);
        data.push_str(content);
        if !content.is_empty() {
            data.push('\n');
        }

        debug!("Writing {} bytes to {:?}", data.len(), self.path);
        fs::write(&self.path, data)?;
        info!("Wrote {:?}", self.path);
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
