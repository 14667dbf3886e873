//! On-disk storage backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError, validate_key};

/// A storage backend that keeps one file per key.
///
/// The layout is flat:
/// ```text
/// <data_dir>/
///     cart.json
///     user.json
/// ```
///
/// A missing file reads as an absent key, so a fresh data directory
/// behaves exactly like empty browser storage. Writes replace the whole
/// file; the values involved are small JSON documents, so there is no
/// partial-update handling.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open a file-backed store rooted at `dir`, creating the directory
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Returns the root directory of this store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path holding the value for `key`.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("state");
        let storage = FileStorage::open(&nested).unwrap();
        assert!(storage.dir().is_dir());
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::open(tmp.path()).unwrap();

        storage.set("cart", "[{\"id\":\"p1\"}]").unwrap();
        assert_eq!(
            storage.get("cart").unwrap().as_deref(),
            Some("[{\"id\":\"p1\"}]")
        );
        assert!(tmp.path().join("cart.json").is_file());
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::open(tmp.path()).unwrap();
        assert!(storage.get("cart").unwrap().is_none());
    }

    #[test]
    fn test_remove_deletes_file_and_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::open(tmp.path()).unwrap();

        storage.set("user", "{}").unwrap();
        storage.remove("user").unwrap();
        assert!(!tmp.path().join("user.json").exists());

        // Second removal is a no-op, not an error.
        storage.remove("user").unwrap();
    }

    #[test]
    fn test_key_cannot_escape_directory() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::open(tmp.path()).unwrap();
        assert!(matches!(
            storage.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_two_stores_share_state() {
        let tmp = TempDir::new().unwrap();
        let writer = FileStorage::open(tmp.path()).unwrap();
        let reader = FileStorage::open(tmp.path()).unwrap();

        writer.set("cart", "[]").unwrap();
        assert_eq!(reader.get("cart").unwrap().as_deref(), Some("[]"));
    }
}
