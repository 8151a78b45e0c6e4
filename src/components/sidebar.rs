//! Sidebar Component
//!
//! Section navigation with per-section counts, completion stats and the
//! profile card.

use leptos::prelude::*;

use crate::models::Section;
use crate::store::{store_show_section, use_app_store, AppStateStoreFields};
use crate::view::TaskCounts;

#[component]
pub fn Sidebar(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let counts = Memo::new(move |_| store.tasks().with(|tasks| TaskCounts::of(tasks)));

    let profile = move || {
        if store.authenticated().get() {
            ("User", "Free Plan")
        } else {
            ("Guest User", "Demo Mode")
        }
    };

    view! {
        <aside class=move || if open.get() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-header">
                <div class="logo">
                    <i class="fas fa-check-double"></i>
                    <span>"TaskFlow"</span>
                </div>
                <button class="sidebar-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                    <i class="fas fa-bars"></i>
                </button>
            </div>

            <nav class="sidebar-nav">
                <ul class="nav-list">
                    {Section::ALL.into_iter().map(|section| {
                        let is_active = move || store.section().get() == section;
                        view! {
                            <li class=move || if is_active() { "nav-item active" } else { "nav-item" }>
                                <a
                                    href="#"
                                    class="nav-link"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        store_show_section(&store, section);
                                        set_open.set(false);
                                    }
                                >
                                    <i class=section.icon()></i>
                                    <span>{section.title()}</span>
                                    {move || counts.get().for_section(section).map(|n| view! {
                                        <span class="nav-count">{n}</span>
                                    })}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>

            <div class="sidebar-stats">
                <div class="stat">
                    <span class="stat-value">{move || counts.get().total}</span>
                    <span class="stat-label">"Total Tasks"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{move || format!("{}%", counts.get().completed_percentage)}</span>
                    <span class="stat-label">"Completed"</span>
                </div>
            </div>

            <div class="profile-info">
                <div class="profile-avatar"><i class="fas fa-user"></i></div>
                <div>
                    <div class="profile-name">{move || profile().0}</div>
                    <div class="profile-role">{move || profile().1}</div>
                </div>
            </div>
        </aside>
    }
}
