//! App shell: routing between the two screens.
//!
//! Only the screen for the active route is mounted. Navigating replaces it
//! with a fresh screen, which then loads the list on its own.

use crate::environment::ScreenEnvironment;
use crate::screens::edit::{EditAction, EditReducer, EditState};
use crate::screens::list::{ListAction, ListReducer, ListState};
use listkeeper_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::time::Duration;

/// A navigable location
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, the list screen
    #[default]
    List,
    /// `/edit`, the edit screen
    Edit,
}

impl Route {
    /// Path of the route
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::List => "/",
            Self::Edit => "/edit",
        }
    }

    /// Route for `path`, if any
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::List),
            "/edit" => Some(Self::Edit),
            _ => None,
        }
    }

    /// Screen title shown in the header
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Edit => "Modify List",
        }
    }
}

/// The mounted screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// List screen state
    List(ListState),
    /// Edit screen state
    Edit(EditState),
}

impl Screen {
    fn mount(route: Route) -> Self {
        match route {
            Route::List => Self::List(ListState::default()),
            Route::Edit => Self::Edit(EditState::default()),
        }
    }
}

/// Application state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    /// Active route
    pub route: Route,
    /// Screen mounted for `route`
    pub screen: Screen,
}

impl AppState {
    /// State with the list screen mounted but still loading
    #[must_use]
    pub fn new() -> Self {
        Self {
            route: Route::List,
            screen: Screen::mount(Route::List),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Application actions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppAction {
    /// Mount the screen for a route
    Navigate(Route),
    /// Action for the list screen
    List(ListAction),
    /// Action for the edit screen
    Edit(EditAction),
}

/// Root reducer embedding both screens
#[derive(Clone, Debug, Default)]
pub struct AppReducer {
    list: ListReducer,
    edit: EditReducer,
}

impl AppReducer {
    /// Creates a new `AppReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            list: ListReducer::new(),
            edit: EditReducer::new(),
        }
    }

    fn navigate(state: &mut AppState, route: Route) -> SmallVec<[Effect<AppAction>; 4]> {
        tracing::info!(path = route.path(), "Navigating");
        state.route = route;
        state.screen = Screen::mount(route);

        let assets_loaded = match route {
            Route::List => AppAction::List(ListAction::AssetsLoaded),
            Route::Edit => AppAction::Edit(EditAction::AssetsLoaded),
        };
        smallvec![Effect::Delay {
            duration: Duration::ZERO,
            action: Box::new(assets_loaded),
        }]
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = ScreenEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let target = match (&state.screen, &action) {
            (_, AppAction::Navigate(route)) => Some(*route),
            (Screen::List(_), AppAction::List(ListAction::OpenEditor)) => Some(Route::Edit),
            (Screen::Edit(_), AppAction::Edit(EditAction::BackToList)) => Some(Route::List),
            _ => None,
        };
        if let Some(route) = target {
            return Self::navigate(state, route);
        }

        match (&mut state.screen, action) {
            (Screen::List(list), AppAction::List(action)) => self
                .list
                .reduce(list, action, env)
                .into_iter()
                .map(|effect| effect.map(AppAction::List))
                .collect(),
            (Screen::Edit(edit), AppAction::Edit(action)) => self
                .edit
                .reduce(edit, action, env)
                .into_iter()
                .map(|effect| effect.map(AppAction::Edit))
                .collect(),
            (_, action) => {
                tracing::debug!(
                    ?action,
                    route = state.route.path(),
                    "Dropped action for unmounted screen"
                );
                SmallVec::new()
            },
        }
    }
}
