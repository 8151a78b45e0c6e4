//! Header Component
//!
//! Page title, search, filter dropdown, theme toggle and account actions.

use leptos::prelude::*;

use crate::actions;
use crate::context::{apply_theme_attribute, redirect, redirect_after, use_app_context};
use crate::models::{Section, TaskFilter};
use crate::session::BrowserStorage;
use crate::store::{store_open_task_modal, store_show_section, use_app_store, AppStateStoreFields};

/// Filter dropdown; picking a filter jumps to "All Tasks". A click anywhere
/// else lands on the backdrop and closes the menu.
#[component]
fn FilterDropdown() -> impl IntoView {
    let store = use_app_store();
    let (open, set_open) = signal(false);

    view! {
        <Show when=move || open.get()>
            <div
                class="dropdown-backdrop"
                style="position: fixed; inset: 0; z-index: 99;"
                on:click=move |_| set_open.set(false)
            ></div>
        </Show>
        <div
            class=move || if open.get() { "filter-dropdown active" } else { "filter-dropdown" }
            style=move || if open.get() { "position: relative; z-index: 100;" } else { "" }
        >
            <button class="btn btn-secondary dropdown-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                <i class="fas fa-filter"></i>
                " "
                {move || store.filter().get().label()}
            </button>
            <div class="dropdown-menu">
                {TaskFilter::ALL.into_iter().map(|filter| view! {
                    <a
                        href="#"
                        data-filter=filter.tag()
                        on:click=move |ev| {
                            ev.prevent_default();
                            store.filter().set(filter);
                            store_show_section(&store, Section::Tasks);
                            set_open.set(false);
                        }
                    >
                        {filter.label()}
                    </a>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Header(set_sidebar_open: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let toggle_theme = move |_| {
        let (next, notice) = actions::toggle_theme(&BrowserStorage, store.theme().get_untracked());
        store.theme().set(next);
        apply_theme_attribute(next);
        ctx.notify(notice);
    };

    let logout = move |_| {
        ctx.notify(actions::logout(&BrowserStorage));
        redirect_after("/login", ctx.config().logout_redirect_delay);
    };

    view! {
        <header class="main-header">
            <button class="mobile-menu-btn" on:click=move |_| set_sidebar_open.update(|o| *o = !*o)>
                <i class="fas fa-bars"></i>
            </button>
            <h1 class="page-title">{move || store.section().get().title()}</h1>

            <div class="search-box">
                <i class="fas fa-search"></i>
                <input
                    type="text"
                    placeholder="Search tasks..."
                    prop:value=move || store.search().get()
                    on:input=move |ev| store.search().set(event_target_value(&ev))
                />
            </div>

            <FilterDropdown />

            <button class="btn btn-primary" on:click=move |_| store_open_task_modal(&store, None)>
                <i class="fas fa-plus"></i>
                " Add Task"
            </button>

            <button class="theme-toggle" title="Toggle theme" on:click=toggle_theme>
                <i class=move || store.theme().get().toggle_icon()></i>
            </button>

            <Show
                when=move || store.authenticated().get()
                fallback=|| view! {
                    <div class="auth-actions">
                        <button class="btn btn-secondary" on:click=|_| redirect("/login")>"Login"</button>
                        <button class="btn btn-primary" on:click=|_| redirect("/register")>"Register"</button>
                    </div>
                }
            >
                <div class="logout-action">
                    <button class="btn btn-secondary" on:click=logout>
                        <i class="fas fa-sign-out-alt"></i>
                        " Logout"
                    </button>
                </div>
            </Show>
        </header>
    }
}
