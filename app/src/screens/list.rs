//! The list screen: shows every item and toggles completion.

use super::{ScreenPhase, load_todos, save_todos, toggle_theme};
use crate::environment::ScreenEnvironment;
use crate::types::{TodoId, TodoList};
use listkeeper_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// State of a mounted list screen
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListState {
    /// Loading or ready
    pub phase: ScreenPhase,
    /// This screen's copy of the list
    pub todos: TodoList,
}

impl ListState {
    /// A ready screen already holding `todos`
    #[must_use]
    pub const fn ready(todos: TodoList) -> Self {
        Self {
            phase: ScreenPhase::Ready,
            todos,
        }
    }
}

/// Inputs to the list screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListAction {
    /// Fonts and other assets are available
    AssetsLoaded,
    /// The persisted list (or the seed data) has been read
    TodosLoaded {
        /// Items, newest first
        todos: TodoList,
    },
    /// Flip completion of an item
    ToggleTodo {
        /// Item to toggle
        id: TodoId,
    },
    /// Flip the shared color scheme
    ToggleTheme,
    /// Go to the edit screen; handled by the app shell
    OpenEditor,
}

/// Reducer for the list screen
#[derive(Clone, Debug, Default)]
pub struct ListReducer;

impl ListReducer {
    /// Creates a new `ListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;
    type Environment = ScreenEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match (state.phase, action) {
            (ScreenPhase::Loading, ListAction::AssetsLoaded) => {
                state.phase = ScreenPhase::Ready;
                smallvec![load_todos(env, |todos| ListAction::TodosLoaded { todos })]
            },
            (_, ListAction::TodosLoaded { todos }) => {
                state.todos = todos;
                smallvec![save_todos(env, state.todos.clone())]
            },
            (ScreenPhase::Ready, ListAction::ToggleTodo { id }) => {
                if state.todos.toggle(id) {
                    smallvec![save_todos(env, state.todos.clone())]
                } else {
                    tracing::debug!(%id, "Toggle ignored, no such item");
                    SmallVec::new()
                }
            },
            (ScreenPhase::Ready, ListAction::ToggleTheme) => smallvec![toggle_theme(env)],
            (phase, action) => {
                tracing::trace!(?phase, ?action, "List screen ignored action");
                SmallVec::new()
            },
        }
    }
}
