//! Dependencies injected into the screen reducers.

use crate::file_store::FileKeyValueStore;
use crate::persistence::TodoPersistence;
use crate::theme::ThemeProvider;
use listkeeper_core::storage::KeyValueStore;
use std::sync::Arc;

/// Environment shared by the list and edit screens
///
/// Both screens receive clones of the same environment, so they talk to the
/// same storage slot and the same theme provider. They do not share their
/// in-memory lists.
#[derive(Clone, Debug)]
pub struct ScreenEnvironment {
    /// Reads and writes the persisted list
    pub persistence: TodoPersistence,
    /// Active color scheme
    pub theme: ThemeProvider,
}

impl ScreenEnvironment {
    /// Creates an environment over any key-value store
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, theme: ThemeProvider) -> Self {
        Self {
            persistence: TodoPersistence::new(storage),
            theme,
        }
    }

    /// Creates an environment persisting to files under `store`'s root
    #[must_use]
    pub fn on_disk(store: FileKeyValueStore, theme: ThemeProvider) -> Self {
        Self::new(Arc::new(store), theme)
    }
}
