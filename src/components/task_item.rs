//! Task Row Components
//!
//! One task in a list, and the compact variant used on the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, ConfirmAction};
use crate::context::{use_app_context, AppContext};
use crate::models::Task;
use crate::store::{
    store_apply_outcome, store_open_task_modal, use_app_store, AppStateStoreFields, AppStore,
};

/// Flip a task's status against the current list, then apply the refetch
fn spawn_toggle(store: AppStore, ctx: AppContext, id: u64) {
    let tasks = store.tasks().get_untracked();
    spawn_local(async move {
        let outcome = actions::toggle_status(&ctx.client(), &tasks, id).await;
        store_apply_outcome(&store, &ctx, outcome);
    });
}

/// A single task row with checkbox, priority badge, edit and delete
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = task.id;
    let completed = task.status;
    let priority = task.priority_level().name();

    view! {
        <div class=if completed { "task-item completed" } else { "task-item" } data-task-id=id.to_string()>
            <div
                class=if completed { "task-checkbox checked" } else { "task-checkbox" }
                on:click=move |_| spawn_toggle(store, ctx, id)
            ></div>
            <div class="task-content">
                <div class="task-title">{task.task}</div>
                <div class="task-description">{task.description}</div>
            </div>
            <div class=format!("task-priority priority-{}", priority)>{priority}</div>
            <div class="task-actions">
                <button
                    class="task-action-btn edit"
                    title="Edit task"
                    on:click=move |_| store_open_task_modal(&store, Some(id))
                >
                    <i class="fas fa-edit"></i>
                </button>
                <button
                    class="task-action-btn delete"
                    title="Delete task"
                    on:click=move |_| store.confirm().set(Some(ConfirmAction::DeleteTask(id)))
                >
                    <i class="fas fa-trash"></i>
                </button>
            </div>
        </div>
    }
}

/// Dashboard row: click opens the editor, the checkbox toggles
#[component]
pub fn RecentTaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = task.id;
    let completed = task.status;
    let priority = task.priority_level().name();

    view! {
        <div class="recent-task-item" on:click=move |_| store_open_task_modal(&store, Some(id))>
            <div
                class=if completed { "recent-task-checkbox checked" } else { "recent-task-checkbox" }
                on:click=move |ev| {
                    ev.stop_propagation();
                    spawn_toggle(store, ctx, id);
                }
            ></div>
            <div class="recent-task-content">
                <div class="recent-task-title">{task.task}</div>
                <div class="recent-task-meta">
                    <span class=format!("priority priority-{}", priority)>
                        {format!("{} priority", priority)}
                    </span>
                </div>
            </div>
        </div>
    }
}
