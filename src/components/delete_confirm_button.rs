//! Delete Confirm Button Component
//!
//! Inline delete confirmation button with confirm/cancel actions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::generation::Generation;

/// Unanswered confirmations fall back to the × button after this long
const CONFIRM_TIMEOUT_MS: u32 = 3_000;

/// Inline delete confirmation button
///
/// Shows a × button initially. When clicked, shows "Delete?" with ✓/✗ buttons.
///
/// # Arguments
/// * `label` - Accessible name of the × button
/// * `disabled` - Disables every button, e.g. while a request is in flight
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);
    // Each open or close starts a new generation; a revert timer only acts
    // on the opening that started it
    let openings = StoredValue::new(Generation::default());

    let close = move || {
        openings.update_value(|g| {
            g.begin();
        });
        set_confirm_delete.set(false);
    };

    let ask = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let mut ticket = 0;
        openings.update_value(|g| ticket = g.begin());
        set_confirm_delete.set(true);
        spawn_local(async move {
            TimeoutFuture::new(CONFIRM_TIMEOUT_MS).await;
            // Row may be gone by now
            let still_open = openings
                .try_with_value(|g| g.is_current(ticket))
                .unwrap_or(false);
            if still_open {
                let _ = set_confirm_delete.try_set(false);
            }
        });
    };

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="delete-btn"
                aria-label=label.clone()
                prop:disabled=move || disabled.get()
                on:click=ask
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    prop:disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        close();
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        close();
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
