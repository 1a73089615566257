//! Todo Row Component
//!
//! Individual todo in the list.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::{Todo, TodoStatus};
use crate::store::{store_is_busy, store_set_busy, use_todo_store, TodoStateStoreFields};

/// A single todo row
///
/// Rows are keyed by id, so the status is read back from the store rather
/// than from the `todo` the row was created with.
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_todo_store();

    let id = todo.id;
    let initial = todo.status;
    let status = Memo::new(move |_| {
        store.todos().with(|todos| {
            todos
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.status)
                .unwrap_or(initial)
        })
    });
    let busy = Signal::derive(move || store_is_busy(&store, id));
    let checkbox = NodeRef::<html::Input>::new();

    let on_toggle = move |ev: web_sys::Event| {
        let next = TodoStatus::from_checked(event_target_checked(&ev));
        store_set_busy(&store, id, true);
        spawn_local(async move {
            let result = commands::update_todo_status(id, next).await;
            if let Ok(updated) = &result {
                log::info!("[ROW] todo #{} is now {}", updated.id, updated.status.label());
            }
            if !ctx.settle(result) {
                // The browser already flipped the box
                if let Some(input) = checkbox.get_untracked() {
                    input.set_checked(status.get_untracked().is_completed());
                }
            }
            store_set_busy(&store, id, false);
        });
    };

    let on_delete = Callback::new(move |_: ()| {
        store_set_busy(&store, id, true);
        spawn_local(async move {
            if ctx.settle(commands::delete_todo(id).await) {
                log::info!("[ROW] deleted todo #{}", id);
            }
            store_set_busy(&store, id, false);
        });
    });

    view! {
        <li
            class=move || if status.get().is_completed() { "todo-row completed" } else { "todo-row" }
            data-id=id.to_string()
        >
            <label class="todo-label">
                <input
                    type="checkbox"
                    node_ref=checkbox
                    prop:checked=move || status.get().is_completed()
                    prop:disabled=move || busy.get()
                    on:change=on_toggle
                />
                <span class="todo-text">{todo.text}</span>
            </label>
            <DeleteConfirmButton
                label=format!("Delete todo #{}", id)
                disabled=busy
                on_confirm=on_delete
            />
        </li>
    }
}
