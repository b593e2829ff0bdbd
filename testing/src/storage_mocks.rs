//! In-memory key-value storage for tests
//!
//! - [`InMemoryKeyValueStore`]: `HashMap` based storage that counts writes
//! - [`FailingKeyValueStore`]: every operation returns a backend error

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Lock poisoning only happens after a test already panicked

use listkeeper_core::storage::{KeyValueStore, StorageError, StorageFuture};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory key-value store for fast, deterministic testing.
///
/// Clones share the same map, so a test can keep a handle while the
/// environment owns another.
///
/// # Example
///
/// ```
/// use listkeeper_testing::InMemoryKeyValueStore;
/// use listkeeper_core::storage::KeyValueStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = InMemoryKeyValueStore::new();
/// store.set("TodoApp", "[]").await?;
///
/// assert_eq!(store.get("TodoApp").await?.as_deref(), Some("[]"));
/// assert_eq!(store.write_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryKeyValueStore {
    data: Arc<RwLock<HashMap<String, String>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one value
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .data
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Read a value synchronously, for assertions
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.data.read().unwrap().get(key).cloned()
    }

    /// Number of successful `set` calls so far
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Check if the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.read().unwrap().is_empty()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get<'a>(&'a self, key: &'a str) -> StorageFuture<'a, Option<String>> {
        Box::pin(async move { Ok(self.data.read().unwrap().get(key).cloned()) })
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> StorageFuture<'a, ()> {
        Box::pin(async move {
            self.data
                .write()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }
}

/// Key-value store whose every operation fails.
///
/// Used to check that persistence failures are logged and swallowed.
#[derive(Clone, Debug, Default)]
pub struct FailingKeyValueStore {
    attempts: Arc<AtomicUsize>,
}

impl FailingKeyValueStore {
    /// Create a new failing store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations attempted against this store
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn fail<T: Send + 'static>(&self, operation: &str) -> StorageFuture<'static, T> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let message = format!("{operation} unavailable");
        Box::pin(async move { Err(StorageError::Backend(message)) })
    }
}

impl KeyValueStore for FailingKeyValueStore {
    fn get<'a>(&'a self, _key: &'a str) -> StorageFuture<'a, Option<String>> {
        self.fail("get")
    }

    fn set<'a>(&'a self, _key: &'a str, _value: &'a str) -> StorageFuture<'a, ()> {
        self.fail("set")
    }
}
