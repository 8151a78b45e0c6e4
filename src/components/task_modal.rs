//! Task Modal Component
//!
//! Create/edit form. Opened by putting a `TaskForm` into the store; the
//! form keeps its own field signals until it is submitted or dismissed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, TaskForm};
use crate::context::use_app_context;
use crate::models::Priority;
use crate::store::{store_apply_outcome, use_app_store, AppStateStoreFields};

#[component]
fn TaskModalForm(form: TaskForm) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = form.id;
    let heading = if form.is_edit() { "Edit Task" } else { "Add New Task" };
    let (title, set_title) = signal(form.title);
    let (description, set_description) = signal(form.description);
    let (priority, set_priority) = signal(form.priority);
    let (status, set_status) = signal(form.status);

    let close = move || store.task_modal().set(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.busy().get_untracked() {
            return;
        }
        let form = TaskForm {
            id,
            title: title.get_untracked(),
            description: description.get_untracked(),
            priority: priority.get_untracked(),
            status: status.get_untracked(),
        };
        store.busy().set(true);
        spawn_local(async move {
            let outcome = actions::submit_task_form(&ctx.client(), &form).await;
            store_apply_outcome(&store, &ctx, outcome);
            store.busy().set(false);
        });
    };

    view! {
        <div class="modal-overlay show" on:click=move |_| close()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{heading}</h2>
                    <button class="modal-close" on:click=move |_| close()>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <form class="task-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="taskTitle">"Title"</label>
                        <input
                            id="taskTitle"
                            type="text"
                            placeholder="What needs to be done?"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="taskDescription">"Description"</label>
                        <textarea
                            id="taskDescription"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="taskPriority">"Priority"</label>
                            <select
                                id="taskPriority"
                                prop:value=move || priority.get().to_string()
                                on:change=move |ev| {
                                    if let Ok(level) = event_target_value(&ev).parse::<u8>() {
                                        set_priority.set(level);
                                    }
                                }
                            >
                                {Priority::ALL.into_iter().map(|p| view! {
                                    <option value=p.level().to_string()>{p.name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="taskStatus">"Status"</label>
                            <select
                                id="taskStatus"
                                prop:value=move || status.get().to_string()
                                on:change=move |ev| set_status.set(event_target_value(&ev) == "true")
                            >
                                <option value="false">"Pending"</option>
                                <option value="true">"Completed"</option>
                            </select>
                        </div>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| close()>"Cancel"</button>
                        <button
                            type="submit"
                            class=move || if store.busy().get() { "btn btn-primary loading" } else { "btn btn-primary" }
                            disabled=move || store.busy().get()
                        >
                            <span class="btn-text">"Save Task"</span>
                            <span class="btn-loader"></span>
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn TaskModal() -> impl IntoView {
    let store = use_app_store();
    move || store.task_modal().get().map(|form| view! { <TaskModalForm form=form /> })
}
