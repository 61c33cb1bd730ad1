//! File-backed preferences storage.
//!
//! Reads and writes the preferences text at a fixed path.  The default path
//! is `prefs.txt` relative to the process working directory; the binary lets
//! the user override it with `--file` or `PREFS_FILE`.
//!
//! Writes are a plain truncate-and-write.  There is no temporary file or
//! rename, so a crash mid-write can leave a truncated file behind; the next
//! load then reports a parse error and keeps the in-memory values.

use std::path::{Path, PathBuf};

use super::{PreferencesStorage, StorageError};

/// File name used when no path is configured.
pub const DEFAULT_FILE_NAME: &str = "prefs.txt";

/// [`PreferencesStorage`] implementation backed by a single file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates storage for the file at `path`.  The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configured file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl PreferencesStorage for FileStorage {
    fn read(&self) -> Result<String, StorageError> {
        std::fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrites the file, creating missing parent directories first.
    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| StorageError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&self.path, contents).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
