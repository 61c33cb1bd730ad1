//! Storage infrastructure: preferences file persistence.
//!
//! This module provides a thin adapter between the application and the
//! file system.  The [`PreferencesStorage`] trait is the only thing the
//! application layer sees:
//!
//! - [`file::FileStorage`] reads and overwrites a single file on disk
//!   (`prefs.txt` in the working directory unless told otherwise).
//! - [`mock::MockStorage`] keeps the contents in memory and counts writes so
//!   tests can assert on persistence without touching the disk.
//!
//! Storage deals in raw text only; parsing and encoding belong to
//! `prefs_core::document`.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod file;
pub mod mock;

/// Error type for storage backend operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Returns `true` if the error means the preferences file does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            StorageError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
        }
    }
}

/// Trait abstracting where the preferences text lives.
///
/// The production implementation is [`file::FileStorage`]; tests use
/// [`mock::MockStorage`].
pub trait PreferencesStorage {
    /// Returns the full stored text.
    fn read(&self) -> Result<String, StorageError>;
    /// Replaces the stored text with `contents`.
    fn write(&mut self, contents: &str) -> Result<(), StorageError>;
    /// Where the text is stored, for log messages.
    fn location(&self) -> &Path;
}
