//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Todo status (matches backend, lowercase on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Pending,
    Completed,
}

impl TodoStatus {
    /// Canonical order used by filters and summaries
    pub const ALL: [TodoStatus; 2] = [TodoStatus::Pending, TodoStatus::Completed];

    /// Status implied by a completion checkbox
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            TodoStatus::Completed
        } else {
            TodoStatus::Pending
        }
    }

    pub fn is_completed(self) -> bool {
        self == TodoStatus::Completed
    }

    pub fn label(self) -> &'static str {
        match self {
            TodoStatus::Pending => "Pending",
            TodoStatus::Completed => "Completed",
        }
    }
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub status: TodoStatus,
}
