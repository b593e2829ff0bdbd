//! # Listkeeper Testing
//!
//! Testing utilities and helpers for listkeeper reducers and storage.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then reducer tests
//! - [`assertions`]: effect assertion helpers
//! - [`InMemoryKeyValueStore`]: `HashMap` backed storage with call counters
//! - [`FailingKeyValueStore`]: storage where every call fails
//!
//! ## Example
//!
//! ```ignore
//! use listkeeper_testing::{InMemoryKeyValueStore, ReducerTest};
//!
//! let storage = Arc::new(InMemoryKeyValueStore::new());
//! ReducerTest::new(ListReducer::new())
//!     .with_env(ScreenEnvironment::new(storage, ThemeProvider::default()))
//!     .given_state(ListState::ready(seed()))
//!     .when_action(ListAction::ToggleTodo { id: TodoId::new(1) })
//!     .then_state(|state| assert!(state.todos.get(TodoId::new(1)).is_some()))
//!     .run();
//! ```

mod storage_mocks;

pub use reducer_test::{ReducerTest, assertions};
pub use storage_mocks::{FailingKeyValueStore, InMemoryKeyValueStore};
