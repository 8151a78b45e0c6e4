//! Confirm Modal Component
//!
//! Asks before a destructive action held in the store, then runs it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::store::{store_apply_outcome, use_app_store, AppStateStoreFields};

#[component]
pub fn ConfirmModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let close = move || store.confirm().set(None);

    let confirm = move |_| {
        let Some(action) = store.confirm().get_untracked() else {
            return;
        };
        if store.busy().get_untracked() {
            return;
        }
        store.busy().set(true);
        spawn_local(async move {
            let outcome = actions::run_confirmed(&ctx.client(), &action).await;
            store_apply_outcome(&store, &ctx, outcome);
            store.busy().set(false);
        });
    };

    move || {
        store.confirm().get().map(|action| view! {
            <div class="modal-overlay show" on:click=move |_| close()>
                <div class="modal confirm-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{action.title()}</h2>
                        <button class="modal-close" on:click=move |_| close()>
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                    <p class="confirm-message">{action.message()}</p>
                    <div class="modal-actions">
                        <button class="btn btn-secondary" on:click=move |_| close()>"Cancel"</button>
                        <button
                            class=move || if store.busy().get() { "btn btn-danger loading" } else { "btn btn-danger" }
                            disabled=move || store.busy().get()
                            on:click=confirm
                        >
                            <span class="btn-text">"Delete"</span>
                            <span class="btn-loader"></span>
                        </button>
                    </div>
                </div>
            </div>
        })
    }
}
