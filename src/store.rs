//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::StatusFilter;
use crate::models::Todo;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Todos returned by the last list query
    pub todos: Vec<Todo>,
    /// Active status filter
    pub filter: StatusFilter,
    /// Todo ids with an update or delete in flight
    pub busy: Vec<u32>,
    /// A list query is in flight
    pub loading: bool,
    /// Message of the last failed command, until dismissed
    pub last_error: Option<String>,
}

impl TodoState {
    pub fn new(filter: StatusFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mark or unmark a todo as having a request in flight
pub fn store_set_busy(store: &TodoStore, todo_id: u32, busy: bool) {
    let busy_field = store.busy();
    let mut ids = busy_field.write();
    ids.retain(|id| *id != todo_id);
    if busy {
        ids.push(todo_id);
    }
}

pub fn store_is_busy(store: &TodoStore, todo_id: u32) -> bool {
    store.busy().with(|ids| ids.contains(&todo_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_ids_are_marked_once_and_cleared() {
        let store = Store::new(TodoState::default());
        store_set_busy(&store, 4, true);
        store_set_busy(&store, 4, true);
        store_set_busy(&store, 7, true);
        assert!(store_is_busy(&store, 4));
        assert_eq!(store.busy().get_untracked(), vec![4, 7]);

        store_set_busy(&store, 4, false);
        assert!(!store_is_busy(&store, 4));
        assert!(store_is_busy(&store, 7));
    }
}
