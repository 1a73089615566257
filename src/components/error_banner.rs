//! Error Banner Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_todo_store, TodoStateStoreFields};

/// Shows the last failed command until dismissed
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_todo_store();

    move || {
        store.last_error().get().map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-text">{message}</span>
                    <button class="dismiss-btn" on:click=move |_| ctx.dismiss_error()>"×"</button>
                </div>
            }
        })
    }
}
