//! Todo List Component
//!
//! Animated list of todos, sorted by id.

use leptos::html;
use leptos::prelude::*;
use leptos_animate::use_auto_animate;

use crate::components::TodoRow;
use crate::config::UiConfig;
use crate::filter::arrange;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let config = use_context::<UiConfig>().expect("UiConfig should be provided");
    let store = use_todo_store();

    let list_ref = NodeRef::<html::Ul>::new();
    use_auto_animate(list_ref, config.animation);

    let rows = Memo::new(move |_| store.todos().with(|todos| arrange(todos)));
    let show_empty = move || rows.with(Vec::is_empty) && !store.loading().get();

    view! {
        <ul class="todo-list" node_ref=list_ref>
            <For
                each=move || rows.get()
                key=|todo| todo.id
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
        <Show when=show_empty>
            <p class="empty-hint">
                {move || {
                    if store.filter().get().is_empty() {
                        "Pick a status to see todos"
                    } else {
                        "Nothing to do"
                    }
                }}
            </p>
        </Show>
    }
}
