//! Persistence of the to-do list in a single key-value slot.
//!
//! The whole list is stored as one JSON array under [`STORAGE_KEY`]. Reads
//! fail soft: anything that cannot be read or decoded is logged and treated
//! as "nothing stored", which sends the caller to the seed data. Writes
//! report their error to the caller, which logs and drops it.
//!
//! Saves may be started faster than they finish. Each save takes a
//! [`SaveTicket`] when it is issued; writes run one at a time and a ticket
//! older than the last written one is skipped, so storage always ends up
//! holding the most recently issued list.

use crate::seed::seed_list;
use crate::types::{TodoItem, TodoList};
use listkeeper_core::storage::{KeyValueStore, StorageError};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::Mutex;

/// Key of the slot holding the serialized list
pub const STORAGE_KEY: &str = "TodoApp";

/// Errors from reading or writing the persisted list
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The key-value store failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The stored value is not a JSON array of items, or the list could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Position of a save in issue order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SaveTicket(u64);

#[derive(Default)]
struct SaveOrder {
    issued: AtomicU64,
    /// Ticket of the last successful write
    written: Mutex<u64>,
}

/// Reads and writes the list through a [`KeyValueStore`]
///
/// Clones share the same storage and save ordering.
#[derive(Clone)]
pub struct TodoPersistence {
    storage: Arc<dyn KeyValueStore>,
    order: Arc<SaveOrder>,
}

impl TodoPersistence {
    /// Creates a persistence adapter over `storage`
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            order: Arc::new(SaveOrder::default()),
        }
    }

    /// Reads the stored items, surfacing every failure
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the store cannot be read or the value
    /// does not decode.
    pub async fn try_load(&self) -> Result<Option<Vec<TodoItem>>, PersistenceError> {
        let Some(json) = self.storage.get(STORAGE_KEY).await? else {
            return Ok(None);
        };
        let items: Vec<TodoItem> = serde_json::from_str(&json)?;
        Ok(Some(items))
    }

    /// Reads the stored items, treating failures and empty lists as absent
    pub async fn load(&self) -> Option<Vec<TodoItem>> {
        match self.try_load().await {
            Ok(Some(items)) if !items.is_empty() => {
                tracing::debug!(count = items.len(), "Loaded persisted todos");
                Some(items)
            },
            Ok(_) => {
                tracing::debug!("No persisted todos");
                None
            },
            Err(error) => {
                tracing::error!(error = %error, key = STORAGE_KEY, "Failed to load todos");
                None
            },
        }
    }

    /// Stored items, or the seed data when none are available, newest first
    pub async fn load_or_seed(&self) -> TodoList {
        match self.load().await {
            Some(items) => TodoList::from_items(items),
            None => seed_list(),
        }
    }

    /// Reserves the next position in save order
    ///
    /// Take the ticket when the list changes, not when the write starts.
    #[must_use]
    pub fn save_ticket(&self) -> SaveTicket {
        SaveTicket(self.order.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Writes the full list now
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the list cannot be encoded or stored.
    pub async fn save(&self, todos: &TodoList) -> Result<(), PersistenceError> {
        let ticket = self.save_ticket();
        self.save_with(ticket, todos).await.map(|_| ())
    }

    /// Writes the full list unless a later ticket has already been written
    ///
    /// Returns `false` when the write was skipped as stale.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the list cannot be encoded or stored.
    pub async fn save_with(
        &self,
        ticket: SaveTicket,
        todos: &TodoList,
    ) -> Result<bool, PersistenceError> {
        let mut written = self.order.written.lock().await;
        if ticket.0 <= *written {
            tracing::debug!(ticket = ticket.0, written = *written, "Skipped stale save");
            return Ok(false);
        }

        let json = serde_json::to_string(todos)?;
        self.storage.set(STORAGE_KEY, &json).await?;
        *written = ticket.0;
        tracing::debug!(count = todos.len(), ticket = ticket.0, "Saved todos");
        Ok(true)
    }
}

impl std::fmt::Debug for TodoPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoPersistence")
            .field("key", &STORAGE_KEY)
            .finish_non_exhaustive()
    }
}
