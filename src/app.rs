//! Todo App
//!
//! Authenticated (or demo) task manager: sidebar, header, the active
//! section, and the modals.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    ConfirmModal, Dashboard, Header, LoadingScreen, Sidebar, TaskList, TaskModal, ToastContainer,
};
use crate::config::AppConfig;
use crate::context::{apply_theme_attribute, AppContext};
use crate::models::Section;
use crate::session::{self, BrowserStorage};
use crate::store::{store_apply_boot, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    let theme = session::load_theme(&BrowserStorage);
    apply_theme_attribute(theme);

    // State
    let ctx = AppContext::new(config);
    let store = Store::new(AppState::new(theme));
    let (sidebar_open, set_sidebar_open) = signal(false);
    let loaded = Signal::derive(move || !store.loading().get());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Session bootstrap on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let boot = session::bootstrap(&ctx.client()).await;
            log::info!("Bootstrap finished, authenticated={}", boot.is_authenticated());
            store_apply_boot(&store, boot);
            TimeoutFuture::new(ctx.config().loading_delay.as_millis() as u32).await;
            store.loading().set(false);
        });
    });

    view! {
        <LoadingScreen hidden=loaded />
        <div class=move || if loaded.get() { "app-container loaded" } else { "app-container" }>
            <Sidebar open=sidebar_open set_open=set_sidebar_open />

            <main class="main-content">
                <Header set_sidebar_open=set_sidebar_open />

                {move || match store.section().get() {
                    Section::Dashboard => view! { <Dashboard /> }.into_any(),
                    section => view! {
                        <section class="content-section active">
                            <TaskList section=section />
                        </section>
                    }.into_any(),
                }}
            </main>
        </div>

        <TaskModal />
        <ConfirmModal />
        <ToastContainer />
    }
}
