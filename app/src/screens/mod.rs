//! Screen reducers and the effects they share.
//!
//! Each screen owns its own copy of the list. A screen starts in
//! [`ScreenPhase::Loading`], renders nothing until its assets are ready, then
//! loads the persisted list (or the seed data) on its own.

use crate::environment::ScreenEnvironment;
use crate::types::TodoList;
use listkeeper_core::effect::Effect;

pub mod edit;
pub mod list;

/// Lifecycle of a mounted screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScreenPhase {
    /// Assets are loading; the screen renders nothing and ignores input
    #[default]
    Loading,
    /// The screen is interactive
    Ready,
}

/// Loads the persisted list, or the seed data, and feeds it back
pub(crate) fn load_todos<A, F>(env: &ScreenEnvironment, loaded: F) -> Effect<A>
where
    F: FnOnce(TodoList) -> A + Send + 'static,
    A: Send + 'static,
{
    let persistence = env.persistence.clone();
    Effect::Future(Box::pin(async move {
        let todos = persistence.load_or_seed().await;
        Some(loaded(todos))
    }))
}

/// Writes the full list; failures are logged and dropped
///
/// The save is ordered when the effect is created, so a save issued for an
/// older list never overwrites a newer one.
pub(crate) fn save_todos<A>(env: &ScreenEnvironment, todos: TodoList) -> Effect<A>
where
    A: Send + 'static,
{
    let persistence = env.persistence.clone();
    let ticket = persistence.save_ticket();
    Effect::Future(Box::pin(async move {
        if let Err(error) = persistence.save_with(ticket, &todos).await {
            tracing::error!(error = %error, "Failed to save todos");
        }
        None
    }))
}

/// Flips the shared color scheme
pub(crate) fn toggle_theme<A>(env: &ScreenEnvironment) -> Effect<A>
where
    A: Send + 'static,
{
    let theme = env.theme.clone();
    Effect::Future(Box::pin(async move {
        let scheme = theme.toggle();
        tracing::info!(scheme = %scheme, "Toggled color scheme");
        None
    }))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::theme::{ColorScheme, ThemeProvider};
    use listkeeper_testing::InMemoryKeyValueStore;
    use std::sync::Arc;

    /// Environment over a fresh in-memory store, with the store handle
    pub(crate) fn environment() -> (ScreenEnvironment, InMemoryKeyValueStore) {
        let storage = InMemoryKeyValueStore::new();
        let env = ScreenEnvironment::new(
            Arc::new(storage.clone()),
            ThemeProvider::new(ColorScheme::Light),
        );
        (env, storage)
    }

    /// Runs every future effect to completion, collecting fed-back actions
    pub(crate) async fn run_effects<A>(effects: impl IntoIterator<Item = Effect<A>>) -> Vec<A> {
        let mut produced = Vec::new();
        for effect in effects {
            match effect {
                Effect::None => {},
                Effect::Future(fut) => produced.extend(fut.await),
                Effect::Delay { action, .. } => produced.push(*action),
            }
        }
        produced
    }
}
