//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod error_banner;
mod status_filter_bar;
mod todo_list;
mod todo_row;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use status_filter_bar::StatusFilterBar;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
