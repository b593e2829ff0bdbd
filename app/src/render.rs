//! Plain-text rendering of the mounted screen.

use crate::app::{AppState, Route, Screen};
use crate::screens::ScreenPhase;
use crate::theme::ColorScheme;
use crate::types::TodoList;
use std::fmt::Write;

/// Renders the active screen; a loading screen renders as an empty string
#[must_use]
pub fn render(state: &AppState, scheme: ColorScheme) -> String {
    let (phase, todos, hint) = match &state.screen {
        Screen::List(list) => (list.phase, &list.todos, "toggle <id> | edit | theme | help"),
        Screen::Edit(edit) => (edit.phase, &edit.todos, "add <text> | rm <id> | back | theme | help"),
    };
    if phase == ScreenPhase::Loading {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "== {} ({}) ==", state.route.title(), state.route.path());
    render_items(&mut out, state.route, todos);
    let _ = writeln!(
        out,
        "-- {} of {} done | scheme: {} | status bar: {}",
        todos.completed_count(),
        todos.len(),
        scheme,
        scheme.status_bar_style(),
    );
    let _ = write!(out, "-- {hint}");
    out
}

fn render_items(out: &mut String, route: Route, todos: &TodoList) {
    if todos.is_empty() {
        let _ = writeln!(out, "  (no items)");
        return;
    }
    for item in todos {
        let _ = match route {
            Route::List => {
                let mark = if item.completed { 'x' } else { ' ' };
                writeln!(out, "  [{mark}] {:>3}  {}", item.id.get(), item.title)
            },
            Route::Edit => writeln!(out, "  {:>3}  {}", item.id.get(), item.title),
        };
    }
}
