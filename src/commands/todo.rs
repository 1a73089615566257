//! Todo Commands
//!
//! Frontend bindings for the three todo backend commands.

use serde::Serialize;

use super::{call, invoke_unit, CommandError};
use crate::models::{Todo, TodoStatus};

pub const LIST_TODOS: &str = "list_todos";
pub const UPDATE_TODO_STATUS: &str = "update_todo_status";
pub const DELETE_TODO: &str = "delete_todo";

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ListTodosArgs<'a> {
    statuses: &'a [TodoStatus],
}

#[derive(Serialize)]
struct UpdateStatusArgs {
    id: u32,
    status: TodoStatus,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

// ========================
// Commands
// ========================

/// Fetch all todos whose status is in `statuses`
pub async fn list_todos(statuses: &[TodoStatus]) -> Result<Vec<Todo>, CommandError> {
    call(LIST_TODOS, &ListTodosArgs { statuses }).await
}

/// Set a todo's status, returns the updated todo
pub async fn update_todo_status(id: u32, status: TodoStatus) -> Result<Todo, CommandError> {
    call(UPDATE_TODO_STATUS, &UpdateStatusArgs { id, status }).await
}

pub async fn delete_todo(id: u32) -> Result<(), CommandError> {
    invoke_unit(DELETE_TODO, &IdArgs { id }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_args_encoding() {
        let statuses = [TodoStatus::Pending, TodoStatus::Completed];
        assert_eq!(
            serde_json::to_value(ListTodosArgs { statuses: &statuses }).unwrap(),
            json!({ "statuses": ["pending", "completed"] })
        );
        assert_eq!(
            serde_json::to_value(ListTodosArgs { statuses: &[] }).unwrap(),
            json!({ "statuses": [] })
        );
    }

    #[test]
    fn test_update_args_encoding() {
        let args = UpdateStatusArgs { id: 3, status: TodoStatus::Completed };
        assert_eq!(serde_json::to_value(args).unwrap(), json!({ "id": 3, "status": "completed" }));
    }

    #[test]
    fn test_delete_args_encoding() {
        assert_eq!(serde_json::to_value(IdArgs { id: 9 }).unwrap(), json!({ "id": 9 }));
    }
}
