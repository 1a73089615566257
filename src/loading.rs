//! Load and Command Outcomes
//!
//! Decisions taken around backend calls, kept apart from the reactive glue.

use crate::commands::CommandError;
use crate::filter::StatusFilter;
use crate::generation::Generation;
use crate::models::{Todo, TodoStatus};

/// Statuses to query for `filter`, or `None` when nothing can match
pub fn plan_load(filter: &StatusFilter) -> Option<Vec<TodoStatus>> {
    let statuses = filter.statuses();
    if statuses.is_empty() {
        None
    } else {
        Some(statuses)
    }
}

/// Orders overlapping list loads. Only the latest one may touch the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadTracker {
    generation: Generation,
}

/// What to do with a finished list load
#[derive(Debug, PartialEq)]
pub enum LoadOutcome {
    /// Superseded by a later load or an empty filter
    Stale,
    Loaded(Vec<Todo>),
    Failed(CommandError),
}

impl LoadTracker {
    /// Start a load. Also used when the filter empties, to void in-flight loads.
    pub fn begin(&mut self) -> u64 {
        self.generation.begin()
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.is_current(ticket)
    }

    pub fn finish(&self, ticket: u64, result: Result<Vec<Todo>, CommandError>) -> LoadOutcome {
        if !self.is_current(ticket) {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(todos) => LoadOutcome::Loaded(todos),
            Err(err) => LoadOutcome::Failed(err),
        }
    }
}

/// Follow-up to an update or delete
#[derive(Debug, PartialEq)]
pub enum AfterCommand {
    /// Succeeded: refetch the list
    Reload,
    /// Failed: surface the error, keep the list as is
    Report(CommandError),
}

pub fn after_command<T>(result: Result<T, CommandError>) -> AfterCommand {
    match result {
        Ok(_) => AfterCommand::Reload,
        Err(err) => AfterCommand::Report(err),
    }
}
