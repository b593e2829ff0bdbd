//! Key-value storage trait for device-local persistence.
//!
//! The application keeps its entire durable state in a single string slot of
//! an opaque key-value store, the way a mobile app uses its platform storage.
//! This module defines that store as a trait so the app can run against a
//! file-backed store in production and an in-memory store in tests.
//!
//! # Implementations
//!
//! - `FileKeyValueStore` (in the `listkeeper` crate): one file per key
//! - `InMemoryKeyValueStore` (in `listkeeper-testing`): `HashMap` backed
//! - `FailingKeyValueStore` (in `listkeeper-testing`): every call errors
//!
//! # Example
//!
//! ```no_run
//! use listkeeper_core::storage::{KeyValueStore, StorageError};
//!
//! async fn example(store: &dyn KeyValueStore) -> Result<(), StorageError> {
//!     store.set("TodoApp", "[]").await?;
//!     let value = store.get("TodoApp").await?;
//!     assert_eq!(value.as_deref(), Some("[]"));
//!     Ok(())
//! }
//! ```

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Boxed future returned by [`KeyValueStore`] methods.
pub type StorageFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StorageError>> + Send + 'a>>;

/// Errors that can occur during key-value store operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The key is not usable by this backend (empty, or contains path separators).
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// String-keyed, string-valued asynchronous storage.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; screens capture the store in
/// effects that run on spawned tasks.
///
/// # Dyn Compatibility
///
/// Methods return boxed futures instead of using `async fn` so the store can
/// be held as `Arc<dyn KeyValueStore>` inside environments.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get<'a>(&'a self, key: &'a str) -> StorageFuture<'a, Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> StorageFuture<'a, ()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = StorageError::InvalidKey("../etc".to_string());
        assert_eq!(error.to_string(), "Invalid storage key: \"../etc\"");

        let error = StorageError::Backend("disk full".to_string());
        assert_eq!(error.to_string(), "Storage backend error: disk full");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: StorageError = io.into();
        assert!(matches!(error, StorageError::Io(_)));
    }
}
