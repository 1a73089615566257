//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::CommandError;
use crate::loading::{after_command, AfterCommand};
use crate::store::{TodoStateStoreFields, TodoStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload todos from backend (read side stays with `App`)
    set_reload_trigger: WriteSignal<u32>,
    store: TodoStore,
}

impl AppContext {
    pub fn new(set_reload_trigger: WriteSignal<u32>, store: TodoStore) -> Self {
        Self {
            set_reload_trigger,
            store,
        }
    }

    /// Trigger a reload of todos
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Log a failed command and surface it in the error banner
    pub fn report(&self, err: &CommandError) {
        log::error!("[APP] {}", err);
        *self.store.last_error().write() = Some(err.to_string());
    }

    /// Reload after a successful update or delete, report a failed one.
    /// Returns whether the command succeeded.
    pub fn settle<T>(&self, result: Result<T, CommandError>) -> bool {
        match after_command(result) {
            AfterCommand::Reload => {
                self.reload();
                true
            }
            AfterCommand::Report(err) => {
                self.report(&err);
                false
            }
        }
    }

    pub fn dismiss_error(&self) {
        *self.store.last_error().write() = None;
    }
}
