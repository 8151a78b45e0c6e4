//! Task List Component
//!
//! Renders the projection for one section, or its empty state.

use leptos::prelude::*;

use crate::actions;
use crate::components::TaskRow;
use crate::context::use_app_context;
use crate::models::{Section, Task};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::{empty_state, section_tasks};

#[component]
pub fn EmptyState(section: Section, #[prop(default = "fas fa-inbox")] icon: &'static str) -> impl IntoView {
    let (heading, hint) = empty_state(section);
    view! {
        <div class="empty-state">
            <i class=icon></i>
            <h3>{heading}</h3>
            <p>{hint}</p>
        </div>
    }
}

#[component]
pub fn TaskList(section: Section) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let visible = move || {
        let filter = store.filter().get();
        let search = store.search().get();
        store.tasks().with(|tasks| section_tasks(tasks, section, filter, &search))
    };

    let clear_completed = move |_| {
        match store.tasks().with_untracked(|tasks| actions::prepare_clear_completed(tasks)) {
            Ok(action) => store.confirm().set(Some(action)),
            Err(notice) => ctx.notify(notice),
        }
    };

    view! {
        <div class="tasks-container">
            <Show when=move || section == Section::Completed>
                <div class="section-actions">
                    <button class="btn btn-danger" on:click=clear_completed>
                        <i class="fas fa-broom"></i>
                        " Clear Completed"
                    </button>
                </div>
            </Show>
            {move || {
                let tasks: Vec<Task> = visible();
                if tasks.is_empty() {
                    view! { <EmptyState section=section /> }.into_any()
                } else {
                    tasks
                        .into_iter()
                        .map(|task| view! { <TaskRow task=task /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
