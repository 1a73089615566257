//! Status Filter
//!
//! Client-chosen status subset and list arrangement helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Todo, TodoStatus};

/// Which statuses the list query asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFilter {
    pub pending: bool,
    pub completed: bool,
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl StatusFilter {
    pub fn all() -> Self {
        Self { pending: true, completed: true }
    }

    pub fn only(status: TodoStatus) -> Self {
        let mut filter = Self { pending: false, completed: false };
        filter.set(status, true);
        filter
    }

    pub fn contains(&self, status: TodoStatus) -> bool {
        match status {
            TodoStatus::Pending => self.pending,
            TodoStatus::Completed => self.completed,
        }
    }

    pub fn set(&mut self, status: TodoStatus, included: bool) {
        match status {
            TodoStatus::Pending => self.pending = included,
            TodoStatus::Completed => self.completed = included,
        }
    }

    pub fn toggle(&mut self, status: TodoStatus) {
        self.set(status, !self.contains(status));
    }

    pub fn is_all(&self) -> bool {
        TodoStatus::ALL.iter().all(|s| self.contains(*s))
    }

    pub fn is_empty(&self) -> bool {
        self.statuses().is_empty()
    }

    /// Included statuses in canonical order
    pub fn statuses(&self) -> Vec<TodoStatus> {
        TodoStatus::ALL.into_iter().filter(|s| self.contains(*s)).collect()
    }
}

/// Todos in display order (ascending id)
pub fn arrange(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by_key(|todo| todo.id);
    sorted
}

/// Per-status counts for the footer line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub pending: usize,
    pub completed: usize,
}

impl Summary {
    pub fn of(todos: &[Todo]) -> Self {
        todos.iter().fold(Self::default(), |mut summary, todo| {
            match todo.status {
                TodoStatus::Pending => summary.pending += 1,
                TodoStatus::Completed => summary.completed += 1,
            }
            summary
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pending, {} completed", self.pending, self.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, status: TodoStatus) -> Todo {
        Todo {
            id,
            text: format!("Todo {}", id),
            status,
        }
    }

    #[test]
    fn test_default_filter_is_all() {
        let filter = StatusFilter::default();
        assert!(filter.is_all());
        assert_eq!(filter.statuses(), vec![TodoStatus::Pending, TodoStatus::Completed]);
    }

    #[test]
    fn test_toggle_down_to_empty() {
        let mut filter = StatusFilter::all();
        filter.toggle(TodoStatus::Pending);
        assert_eq!(filter, StatusFilter::only(TodoStatus::Completed));
        filter.toggle(TodoStatus::Completed);
        assert!(filter.is_empty());
        assert!(filter.statuses().is_empty());
        filter.toggle(TodoStatus::Pending);
        assert_eq!(filter.statuses(), vec![TodoStatus::Pending]);
    }

    #[test]
    fn test_statuses_canonical_order() {
        let mut filter = StatusFilter::only(TodoStatus::Completed);
        filter.set(TodoStatus::Pending, true);
        // Set twice, listed once
        filter.set(TodoStatus::Pending, true);
        assert_eq!(filter.statuses(), vec![TodoStatus::Pending, TodoStatus::Completed]);
    }

    #[test]
    fn test_arrange_sorts_by_id() {
        let todos = vec![
            make_todo(5, TodoStatus::Pending),
            make_todo(1, TodoStatus::Completed),
            make_todo(3, TodoStatus::Pending),
        ];
        let arranged = arrange(&todos);
        let ids: Vec<u32> = arranged.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        assert_eq!(arranged.len(), todos.len());
        assert!(todos.iter().all(|t| arranged.contains(t)));
    }

    #[test]
    fn test_arrange_empty() {
        assert!(arrange(&[]).is_empty());
    }

    #[test]
    fn test_summary() {
        let todos = vec![
            make_todo(1, TodoStatus::Pending),
            make_todo(2, TodoStatus::Completed),
            make_todo(3, TodoStatus::Pending),
        ];
        let summary = Summary::of(&todos);
        assert_eq!(summary, Summary { pending: 2, completed: 1 });
        assert_eq!(summary.to_string(), "2 pending, 1 completed");
    }
}
