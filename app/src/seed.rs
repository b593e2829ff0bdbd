//! Fallback items shown until something has been persisted.

use crate::types::{TodoId, TodoItem, TodoList};

const SEED: &[(u64, &str, bool)] = &[
    (1, "Learn React Native", false),
    (2, "Learn Next.js", false),
    (3, "Build a Todo App", false),
    (4, "Read a book", true),
    (5, "Go to the gym", false),
    (6, "Buy groceries", false),
    (7, "Write a blog post", true),
    (8, "Call mom", false),
    (9, "Plan vacation", true),
    (10, "Watch a movie", false),
];

/// Seed items as stored, ascending by id
#[must_use]
pub fn seed_items() -> Vec<TodoItem> {
    SEED.iter()
        .map(|&(id, title, completed)| TodoItem {
            id: TodoId::new(id),
            title: title.to_string(),
            completed,
        })
        .collect()
}

/// Seed items in display order
#[must_use]
pub fn seed_list() -> TodoList {
    TodoList::from_items(seed_items())
}
