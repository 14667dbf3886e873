//! The storage port: durable string-keyed state.
//!
//! Stores persist their state as JSON documents under short, fixed keys
//! (`cart`, `user`). The port keeps that contract deliberately small -
//! get, set, remove - so store logic can be exercised against the
//! in-memory backend while the CLI runs on the on-disk one.
//!
//! # Contract
//!
//! - Keys are short identifiers restricted to `[A-Za-z0-9_-]`.
//! - Values are opaque strings; callers serialize/deserialize JSON.
//! - A missing key reads as `None`; removing a missing key is a no-op.
//! - Writes are last-write-wins. There is no versioning and no
//!   cross-process coordination.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key contains characters outside the allowed set.
    #[error("storage key {0:?} contains unsupported characters")]
    InvalidKey(String),

    /// An underlying I/O operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable string-keyed storage.
///
/// Implementations take `&self`; the single-threaded core never mutates
/// a backend from two places at once.
pub trait Storage {
    /// Read the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid or the backend
    /// cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid or the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid or the removal
    /// fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Validate that a key stays within the allowed character set.
///
/// Keys become file names in the on-disk backend, so anything that could
/// escape the data directory is rejected here, for every backend.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_simple_keys() {
        assert!(validate_key("cart").is_ok());
        assert!(validate_key("user").is_ok());
        assert!(validate_key("session_2").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_path_like_keys() {
        assert!(validate_key("").is_err());
        assert!(validate_key("../cart").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("cart.json").is_err());
    }
}
