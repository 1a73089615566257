//! Status Filter Bar Component
//!
//! Toggle buttons choosing which statuses the list shows.

use leptos::prelude::*;

use crate::filter::StatusFilter;
use crate::models::TodoStatus;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn StatusFilterBar() -> impl IntoView {
    let store = use_todo_store();
    let is_all = move || store.filter().get().is_all();

    view! {
        <div class="status-filter" role="group" aria-label="Filter by status">
            <button
                class=move || if is_all() { "filter-btn active" } else { "filter-btn" }
                aria-pressed=move || is_all().to_string()
                on:click=move |_| *store.filter().write() = StatusFilter::all()
            >
                "All"
            </button>
            {TodoStatus::ALL.iter().map(|status| {
                let status = *status;
                let is_selected = move || store.filter().get().contains(status);
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        aria-pressed=move || is_selected().to_string()
                        on:click=move |_| store.filter().write().toggle(status)
                    >
                        {status.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
