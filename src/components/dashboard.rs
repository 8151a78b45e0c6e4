//! Dashboard Component
//!
//! Four stat cards and the five most recent tasks.

use leptos::prelude::*;

use crate::components::{EmptyState, RecentTaskRow};
use crate::context::use_app_context;
use crate::models::Section;
use crate::store::{store_open_task_modal, use_app_store, AppStateStoreFields};
use crate::view::{recent_tasks, TaskCounts};

#[component]
fn StatCard(label: &'static str, icon: &'static str, #[prop(into)] value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-icon"><i class=icon></i></div>
            <div class="stat-info">
                <h3>{move || value.get()}</h3>
                <p>{label}</p>
            </div>
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let limit = use_app_context().config().recent_limit;
    let counts = Memo::new(move |_| store.tasks().with(|tasks| TaskCounts::of(tasks)));
    let recent = move || store.tasks().with(|tasks| recent_tasks(tasks, limit));

    view! {
        <div class="dashboard">
            <div class="stats-grid">
                <StatCard label="Total Tasks" icon="fas fa-tasks" value=Signal::derive(move || counts.get().total) />
                <StatCard label="Completed" icon="fas fa-check-circle" value=Signal::derive(move || counts.get().completed) />
                <StatCard label="Pending" icon="fas fa-clock" value=Signal::derive(move || counts.get().pending) />
                <StatCard label="Important" icon="fas fa-star" value=Signal::derive(move || counts.get().important) />
            </div>

            <div class="recent-tasks">
                <div class="section-header">
                    <h2>"Recent Tasks"</h2>
                    <button class="btn btn-primary" on:click=move |_| store_open_task_modal(&store, None)>
                        <i class="fas fa-plus"></i>
                        " New Task"
                    </button>
                </div>
                {move || {
                    let tasks = recent();
                    if tasks.is_empty() {
                        view! { <EmptyState section=Section::Dashboard icon="fas fa-plus-circle" /> }.into_any()
                    } else {
                        tasks
                            .into_iter()
                            .map(|task| view! { <RecentTaskRow task=task /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
