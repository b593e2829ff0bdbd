//! The edit screen: adds and removes items.

use super::{ScreenPhase, load_todos, save_todos, toggle_theme};
use crate::environment::ScreenEnvironment;
use crate::types::{TodoId, TodoList};
use listkeeper_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// State of a mounted edit screen
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditState {
    /// Loading or ready
    pub phase: ScreenPhase,
    /// This screen's copy of the list
    pub todos: TodoList,
    /// Contents of the new-item input field
    pub input: String,
}

impl EditState {
    /// A ready screen already holding `todos`, with an empty input
    #[must_use]
    pub const fn ready(todos: TodoList) -> Self {
        Self {
            phase: ScreenPhase::Ready,
            todos,
            input: String::new(),
        }
    }
}

/// Inputs to the edit screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditAction {
    /// Fonts and other assets are available
    AssetsLoaded,
    /// The persisted list (or the seed data) has been read
    TodosLoaded {
        /// Items, newest first
        todos: TodoList,
    },
    /// The input field changed
    InputChanged {
        /// New contents of the field
        text: String,
    },
    /// Add the input field's text as a new item
    AddTodo,
    /// Delete an item
    RemoveTodo {
        /// Item to delete
        id: TodoId,
    },
    /// Flip the shared color scheme
    ToggleTheme,
    /// Return to the list screen; handled by the app shell
    BackToList,
}

/// Reducer for the edit screen
#[derive(Clone, Debug, Default)]
pub struct EditReducer;

impl EditReducer {
    /// Creates a new `EditReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for EditReducer {
    type State = EditState;
    type Action = EditAction;
    type Environment = ScreenEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match (state.phase, action) {
            (ScreenPhase::Loading, EditAction::AssetsLoaded) => {
                state.phase = ScreenPhase::Ready;
                smallvec![load_todos(env, |todos| EditAction::TodosLoaded { todos })]
            },
            (_, EditAction::TodosLoaded { todos }) => {
                state.todos = todos;
                smallvec![save_todos(env, state.todos.clone())]
            },
            (ScreenPhase::Ready, EditAction::InputChanged { text }) => {
                state.input = text;
                SmallVec::new()
            },
            (ScreenPhase::Ready, EditAction::AddTodo) => match state.todos.add(&state.input) {
                Some(id) => {
                    tracing::debug!(%id, "Added todo");
                    state.input.clear();
                    smallvec![save_todos(env, state.todos.clone())]
                },
                None => SmallVec::new(),
            },
            (ScreenPhase::Ready, EditAction::RemoveTodo { id }) => {
                if state.todos.remove(id) {
                    smallvec![save_todos(env, state.todos.clone())]
                } else {
                    tracing::debug!(%id, "Remove ignored, no such item");
                    SmallVec::new()
                }
            },
            (ScreenPhase::Ready, EditAction::ToggleTheme) => smallvec![toggle_theme(env)],
            (phase, action) => {
                tracing::trace!(?phase, ?action, "Edit screen ignored action");
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{environment, run_effects};
    use crate::seed::seed_list;
    use crate::types::TodoItem;
    use listkeeper_testing::{ReducerTest, assertions};

    fn item(id: u64, title: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId::new(id),
            title: title.to_string(),
            completed,
        }
    }

    fn typed(text: &str) -> EditAction {
        EditAction::InputChanged {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_buy_milk_walk_dog() {
        let (env, _) = environment();

        ReducerTest::new(EditReducer::new())
            .with_env(env)
            .given_state(EditState::ready(TodoList::new()))
            .when_action(typed("Buy milk"))
            .when_action(EditAction::AddTodo)
            .when_action(typed("Walk dog"))
            .when_action(EditAction::AddTodo)
            .then_state(|state| {
                assert_eq!(
                    state.todos.items(),
                    &[item(2, "Walk dog", false), item(1, "Buy milk", false)]
                );
                assert!(state.input.is_empty());
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn test_then_remove_and_add_reuses_max_plus_one() {
        let (env, _) = environment();
        let todos = TodoList::from_items(vec![item(1, "Buy milk", false), item(2, "Walk dog", false)]);

        ReducerTest::new(EditReducer::new())
            .with_env(env)
            .given_state(EditState::ready(todos))
            .when_action(EditAction::RemoveTodo { id: TodoId::new(2) })
            .when_action(typed("Feed cat"))
            .when_action(EditAction::AddTodo)
            .then_state(|state| {
                assert_eq!(
                    state.todos.items(),
                    &[item(2, "Feed cat", false), item(1, "Buy milk", false)]
                );
            })
            .run();
    }

    #[test]
    fn test_blank_input_is_ignored_and_kept() {
        let (env, _) = environment();

        ReducerTest::new(EditReducer::new())
            .with_env(env)
            .given_state(EditState::ready(TodoList::from_items(vec![item(1, "a", false)])))
            .when_action(typed("   "))
            .when_action(EditAction::AddTodo)
            .then_state(|state| {
                assert_eq!(state.todos.len(), 1);
                assert_eq!(state.input, "   ");
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_add_with_exhausted_ids_is_ignored() {
        let (env, _) = environment();

        ReducerTest::new(EditReducer::new())
            .with_env(env)
            .given_state(EditState::ready(TodoList::from_items(vec![item(
                u64::MAX,
                "last",
                false,
            )])))
            .when_action(typed("Walk dog"))
            .when_action(EditAction::AddTodo)
            .then_state(|state| {
                assert_eq!(state.todos.len(), 1);
                assert_eq!(state.input, "Walk dog");
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let (env, _) = environment();

        ReducerTest::new(EditReducer::new())
            .with_env(env)
            .given_state(EditState::ready(TodoList::from_items(vec![item(1, "a", false)])))
            .when_action(EditAction::RemoveTodo { id: TodoId::new(3) })
            .then_state(|state| assert_eq!(state.todos.len(), 1))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_input_ignored_while_loading() {
        let (env, _) = environment();

        ReducerTest::new(EditReducer::new())
            .with_env(env)
            .given_state(EditState::default())
            .when_action(typed("early"))
            .when_action(EditAction::AddTodo)
            .then_state(|state| {
                assert!(state.input.is_empty());
                assert!(state.todos.is_empty());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[tokio::test]
    async fn test_load_then_save_round_trip() {
        let (env, storage) = environment();
        let mut state = EditState::default();

        let effects = EditReducer.reduce(&mut state, EditAction::AssetsLoaded, &env);
        let produced = run_effects(effects).await;
        assert_eq!(produced, vec![EditAction::TodosLoaded { todos: seed_list() }]);

        for action in produced {
            let effects = EditReducer.reduce(&mut state, action, &env);
            run_effects(effects).await;
        }

        assert_eq!(state.todos, seed_list());
        // The loaded list is written back
        assert_eq!(storage.write_count(), 1);
    }

    #[tokio::test]
    async fn test_add_persists_title_as_typed() {
        let (env, _) = environment();
        let mut state = EditState::ready(TodoList::new());

        let _ = EditReducer.reduce(&mut state, typed(" Buy milk "), &env);
        let effects = EditReducer.reduce(&mut state, EditAction::AddTodo, &env);
        run_effects(effects).await;

        assert_eq!(
            env.persistence.load().await,
            Some(vec![item(1, " Buy milk ", false)])
        );
    }
}
