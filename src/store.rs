//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All writes go
//! through the helpers below or through a component's own field setter.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::{ConfirmAction, Outcome, TaskForm};
use crate::context::AppContext;
use crate::models::{Section, Task, TaskFilter, Theme};
use crate::session::Boot;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last fetched collection (or the demo tasks)
    pub tasks: Vec<Task>,
    /// Dropdown filter for the "All Tasks" section
    pub filter: TaskFilter,
    /// Search box contents
    pub search: String,
    pub section: Section,
    pub authenticated: bool,
    /// True until bootstrap and the loading delay are done
    pub loading: bool,
    pub theme: Theme,
    /// Create/edit modal contents; `None` when closed
    pub task_modal: Option<TaskForm>,
    /// Pending destructive action; `None` when the confirm modal is closed
    pub confirm: Option<ConfirmAction>,
    /// A mutation is in flight (submit buttons are disabled)
    pub busy: bool,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            loading: true,
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Install the bootstrap result
pub fn store_apply_boot(store: &AppStore, boot: Boot) {
    store.authenticated().set(boot.is_authenticated());
    store.tasks().set(boot.into_tasks());
}

/// Apply a finished workflow: replace the list, close modals, show notices
pub fn store_apply_outcome(store: &AppStore, ctx: &AppContext, outcome: Outcome) {
    if let Some(tasks) = outcome.tasks {
        store.tasks().set(tasks);
    }
    if outcome.close_task_modal {
        store.task_modal().set(None);
    }
    if outcome.close_confirm {
        store.confirm().set(None);
    }
    for notice in outcome.notices {
        ctx.notify(notice);
    }
}

/// Open the modal empty (create) or filled from a task (edit)
pub fn store_open_task_modal(store: &AppStore, task_id: Option<u64>) {
    let form = match task_id {
        Some(id) => {
            let found = store
                .tasks()
                .with(|tasks| tasks.iter().find(|t| t.id == id).map(TaskForm::edit));
            match found {
                Some(form) => form,
                None => return,
            }
        }
        None => TaskForm::default(),
    };
    store.task_modal().set(Some(form));
}

pub fn store_show_section(store: &AppStore, section: Section) {
    store.section().set(section);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo_tasks;

    #[test]
    fn test_boot_keeps_loading_screen_until_delay() {
        let store = Store::new(AppState::new(Theme::Dark));
        store_apply_boot(&store, Boot::Guest(demo_tasks()));

        assert!(store.loading().get_untracked());
        assert!(!store.authenticated().get_untracked());
        assert_eq!(store.tasks().get_untracked().len(), 5);
        assert_eq!(store.theme().get_untracked(), Theme::Dark);
    }
}
