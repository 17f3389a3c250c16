//! In-memory to-do store.
//!
//! # Design
//! `TodoStore` owns both the ordered sequence of items and the id counter,
//! so the router can guard them with a single lock. Ids start at 1 and are
//! never handed out twice, even after the item that held one is deleted.
//! Lookups are linear scans; the list is expected to stay small.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoreError, TodoOp};

/// A single to-do record as stored and as returned over the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update for a [`TodoItem`]. `None` leaves the field as it was.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    fn apply(self, item: &mut TodoItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(completed) = self.completed {
            item.completed = completed;
        }
    }
}

#[derive(Debug)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    next_id: i64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new, not yet completed item and return a copy of it.
    pub fn create(&mut self, title: String) -> TodoItem {
        let item = TodoItem {
            id: self.next_id,
            title,
            completed: false,
        };
        self.next_id += 1;
        self.items.push(item.clone());
        debug!(id = item.id, "created to-do");
        item
    }

    /// Every stored item, oldest first.
    pub fn list_all(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Result<&TodoItem, StoreError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound { id, op: TodoOp::Lookup })
    }

    /// Apply `patch` in place to the first item with `id`.
    pub fn update(&mut self, id: i64, patch: TodoPatch) -> Result<&TodoItem, StoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound { id, op: TodoOp::Update })?;
        patch.apply(item);
        debug!(id, "updated to-do");
        Ok(item)
    }

    /// Remove one item with `id` and return the confirmation message.
    ///
    /// The scan keeps the last matching position. Ids are unique, so this
    /// only differs from a first-match scan if that invariant is broken.
    pub fn delete(&mut self, id: i64) -> Result<String, StoreError> {
        let index = self
            .items
            .iter()
            .rposition(|item| item.id == id)
            .ok_or(StoreError::NotFound { id, op: TodoOp::Delete })?;
        self.items.remove(index);
        debug!(id, "deleted to-do");
        Ok(format!("Successfully deleted to-do ID {id}."))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(titles: &[&str]) -> TodoStore {
        let mut store = TodoStore::new();
        for title in titles {
            store.create(title.to_string());
        }
        store
    }

    #[test]
    fn create_assigns_first_id_and_defaults_completed() {
        let mut store = TodoStore::new();
        let item = store.create("Buy milk".to_string());
        assert_eq!(item.id, 1);
        assert_eq!(item.title, "Buy milk");
        assert!(!item.completed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_keep_increasing_after_delete() {
        let mut store = store_with(&["a", "b"]);
        store.delete(2).unwrap();
        let item = store.create("c".to_string());
        assert_eq!(item.id, 3);
    }

    #[test]
    fn delete_preserves_order_of_remaining_items() {
        let mut store = store_with(&["one", "two", "three"]);
        store.delete(2).unwrap();
        let ids: Vec<i64> = store.list_all().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn get_missing_reports_lookup_message() {
        let store = TodoStore::new();
        let err = store.get(42).unwrap_err();
        assert_eq!(err.to_string(), "Can't find To-do ID 42.");
    }

    #[test]
    fn update_only_completed_keeps_title() {
        let mut store = store_with(&["Walk dog"]);
        let patch = TodoPatch {
            title: None,
            completed: Some(true),
        };
        let item = store.update(1, patch).unwrap();
        assert_eq!(item.title, "Walk dog");
        assert!(item.completed);
        assert!(store.get(1).unwrap().completed);
    }

    #[test]
    fn update_with_empty_patch_changes_nothing() {
        let mut store = store_with(&["Walk dog"]);
        let before = store.get(1).unwrap().clone();
        let after = store.update(1, TodoPatch::default()).unwrap();
        assert_eq!(&before, after);
    }

    #[test]
    fn update_missing_reports_update_message() {
        let mut store = TodoStore::new();
        let err = store.update(7, TodoPatch::default()).unwrap_err();
        assert_eq!(err.to_string(), "Can't find To-do ID 7 to update.");
    }

    #[test]
    fn deleting_twice_fails_the_second_time() {
        let mut store = store_with(&["once"]);
        assert_eq!(store.delete(1).unwrap(), "Successfully deleted to-do ID 1.");
        let err = store.delete(1).unwrap_err();
        assert!(err.to_string().ends_with("to delete."));
        assert!(store.is_empty());
    }
}
