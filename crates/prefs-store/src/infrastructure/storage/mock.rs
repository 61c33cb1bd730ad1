//! Mock storage backend for unit testing.
//!
//! Keeps the preferences text in memory, counts writes, and can be told to
//! fail reads or writes so tests can cover error paths without a real disk.

use std::io;
use std::path::Path;

use super::{PreferencesStorage, StorageError};

const MOCK_LOCATION: &str = "<memory>";

/// In-memory implementation of [`PreferencesStorage`].
#[derive(Debug, Default, Clone)]
pub struct MockStorage {
    contents: Option<String>,
    write_count: u32,
    fail_writes: bool,
}

impl MockStorage {
    /// Creates an empty backend; reads fail with `NotFound` until something is written.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that already holds `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// Makes every subsequent write fail with a permission error.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Returns the stored text, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Returns the number of successful writes.
    pub fn write_count(&self) -> u32 {
        self.write_count
    }
}

impl PreferencesStorage for MockStorage {
    fn read(&self) -> Result<String, StorageError> {
        self.contents.clone().ok_or_else(|| StorageError::Io {
            path: MOCK_LOCATION.into(),
            source: io::Error::new(io::ErrorKind::NotFound, "no contents written yet"),
        })
    }

    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io {
                path: MOCK_LOCATION.into(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "writes disabled"),
            });
        }
        self.contents = Some(contents.to_string());
        self.write_count += 1;
        Ok(())
    }

    fn location(&self) -> &Path {
        Path::new(MOCK_LOCATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mock_read_is_not_found() {
        let storage = MockStorage::new();
        assert!(storage.read().unwrap_err().is_not_found());
    }

    #[test]
    fn test_mock_write_then_read_returns_contents() {
        // Arrange
        let mut storage = MockStorage::new();

        // Act
        storage.write("{}").expect("write");

        // Assert
        assert_eq!(storage.read().expect("read"), "{}");
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_mock_failing_writes_keep_previous_contents() {
        // Arrange
        let mut storage = MockStorage::with_contents("old");
        storage.fail_writes(true);

        // Act
        let result = storage.write("new");

        // Assert
        assert!(result.is_err());
        assert_eq!(storage.contents(), Some("old"));
        assert_eq!(storage.write_count(), 0);
    }
}
