//! Todo Frontend App
//!
//! Root component: filter bar, animated list and footer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ErrorBanner, StatusFilterBar, TodoList};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::filter::Summary;
use crate::loading::{plan_load, LoadOutcome, LoadTracker};
use crate::preferences;
use crate::store::{TodoState, TodoStateStoreFields};

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    // State
    let store = Store::new(TodoState::new(config.initial_filter(preferences::load_filter())));
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new(set_reload_trigger, store);
    let loads = StoredValue::new(LoadTracker::default());

    // Provide context to all children
    provide_context(config);
    provide_context(store);
    provide_context(ctx);

    // Remember the filter across sessions
    Effect::new(move |_| {
        let filter = store.filter().get();
        preferences::save_filter(&filter);
    });

    // Load todos when filter or trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let filter = store.filter().get();

        // Every run supersedes loads still in flight
        let mut ticket = 0;
        loads.update_value(|tracker| ticket = tracker.begin());

        let Some(statuses) = plan_load(&filter) else {
            log::debug!("[APP] Empty filter, clearing list (trigger={})", trigger);
            *store.todos().write() = Vec::new();
            *store.loading().write() = false;
            return;
        };
        log::debug!("[APP] Loading todos for {:?}, trigger={}", statuses, trigger);

        *store.loading().write() = true;
        spawn_local(async move {
            let result = commands::list_todos(&statuses).await;
            match loads.with_value(|tracker| tracker.finish(ticket, result)) {
                LoadOutcome::Stale => {
                    log::debug!("[APP] Dropped superseded load #{}", ticket);
                    return;
                }
                LoadOutcome::Loaded(loaded) => {
                    log::debug!("[APP] Loaded {} todos", loaded.len());
                    *store.todos().write() = loaded;
                }
                LoadOutcome::Failed(err) => ctx.report(&err),
            }
            *store.loading().write() = false;
        });
    });

    let summary = move || Summary::of(&store.todos().get()).to_string();

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>

            <StatusFilterBar />

            <ErrorBanner />

            <TodoList />

            <p class="todo-count">
                {summary}
                {move || store.loading().get().then_some(" · loading…")}
            </p>
        </main>
    }
}
