//! Loading Screen Component

use leptos::prelude::*;

/// Full-page spinner, faded out once `hidden` turns true
#[component]
pub fn LoadingScreen(#[prop(into)] hidden: Signal<bool>) -> impl IntoView {
    view! {
        <div class=move || if hidden.get() { "loading-screen hidden" } else { "loading-screen" }>
            <div class="loading-spinner"></div>
            <p>"Loading your tasks..."</p>
        </div>
    }
}
