//! Domain types for the to-do list.
//!
//! A to-do list is an ordered collection of items, newest first. Items are
//! identified by a small integer id assigned as one more than the largest id
//! currently in the list.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Identifier of a to-do item
///
/// Serialized as a bare JSON number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A single to-do item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Identifier, unique within the list
    pub id: TodoId,
    /// Text of the item
    pub title: String,
    /// Whether the item is done
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed, item
    #[must_use]
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

/// The in-memory list owned by a mounted screen
///
/// Serializes as a plain JSON array of items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a list from loaded items, sorted descending by id
    ///
    /// The sort is stable, so items sharing an id keep their relative order.
    #[must_use]
    pub fn from_items(mut items: Vec<TodoItem>) -> Self {
        items.sort_by_key(|item| Reverse(item.id));
        Self { items }
    }

    /// Items in display order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Consumes the list, returning its items in display order
    #[must_use]
    pub fn into_items(self) -> Vec<TodoItem> {
        self.items
    }

    /// Iterates over items in display order
    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.items.iter()
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// First item with the given id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Id the next added item will receive: `max(ids) + 1`, or `1` when empty
    ///
    /// `None` once the largest id is `u64::MAX`.
    #[must_use]
    pub fn next_id(&self) -> Option<TodoId> {
        match self.items.iter().map(|item| item.id.get()).max() {
            Some(max) => max.checked_add(1).map(TodoId::new),
            None => Some(TodoId::new(1)),
        }
    }

    /// Prepends a new item titled `title`
    ///
    /// Titles that are empty after trimming are ignored. The title is stored
    /// as given, surrounding whitespace included.
    ///
    /// Returns the id of the new item, or `None` if nothing was added.
    pub fn add(&mut self, title: &str) -> Option<TodoId> {
        if title.trim().is_empty() {
            return None;
        }

        let Some(id) = self.next_id() else {
            tracing::warn!("Ignoring add, item ids are exhausted");
            return None;
        };
        self.items.insert(0, TodoItem::new(id, title));
        Some(id)
    }

    /// Removes every item with the given id
    ///
    /// Returns `true` if anything was removed.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Flips `completed` on every item with the given id
    ///
    /// Returns `true` if any item matched.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        let mut matched = false;
        for item in self.items.iter_mut().filter(|item| item.id == id) {
            item.completed = !item.completed;
            matched = true;
        }
        matched
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
