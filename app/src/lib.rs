//! # Listkeeper
//!
//! A two-screen to-do list: a list screen that toggles completion and an
//! edit screen that adds and removes items. The list is persisted as one JSON
//! array under a single key; a shared [`ThemeProvider`] holds the light/dark
//! color scheme.
//!
//! The screens are reducers run by a [`listkeeper_runtime::Store`]:
//!
//! ```no_run
//! use listkeeper::{AppAction, AppReducer, AppState, FileKeyValueStore, Route};
//! use listkeeper::{ScreenEnvironment, ThemeProvider};
//! use listkeeper_runtime::Store;
//!
//! # async fn demo() -> Result<(), listkeeper_runtime::StoreError> {
//! let env = ScreenEnvironment::on_disk(
//!     FileKeyValueStore::new("/tmp/listkeeper"),
//!     ThemeProvider::default(),
//! );
//! let store = Store::new(AppState::new(), AppReducer::new(), env);
//!
//! store.send(AppAction::Navigate(Route::List)).await?.wait().await;
//! let count = store.state(|s| s.screen.clone()).await;
//! # let _ = count;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod command;
pub mod config;
pub mod environment;
pub mod file_store;
pub mod persistence;
pub mod render;
pub mod screens;
pub mod seed;
pub mod theme;
pub mod types;

pub use app::{AppAction, AppReducer, AppState, Route, Screen};
pub use command::{Command, CommandError};
pub use config::Config;
pub use environment::ScreenEnvironment;
pub use file_store::FileKeyValueStore;
pub use persistence::{PersistenceError, STORAGE_KEY, SaveTicket, TodoPersistence};
pub use screens::ScreenPhase;
pub use screens::edit::{EditAction, EditReducer, EditState};
pub use screens::list::{ListAction, ListReducer, ListState};
pub use theme::{ColorScheme, Palette, ParseSchemeError, ThemeProvider};
pub use types::{TodoId, TodoItem, TodoList};
