//! Task Mutations
//!
//! Each workflow runs its request(s), then refetches the whole collection on
//! success. Results come back as an [`Outcome`] for the UI to apply, so the
//! workflows themselves never touch signals or the DOM.

use futures::future::join_all;

use crate::api::{ApiClient, Transport};
use crate::error::ValidationError;
use crate::models::{Priority, Task, TaskPayload, Theme};
use crate::session::{self, KeyValueStore};

// ========================
// Notifications
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn icon(self) -> &'static str {
        match self {
            NoticeKind::Success => "fas fa-check-circle",
            NoticeKind::Error => "fas fa-times-circle",
            NoticeKind::Info => "fas fa-info-circle",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }
}

/// Transient message for the toast/alert container
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: Option<String>,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: Option<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, None)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, None)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, Some(message.into()))
    }
}

/// What the UI should do after a workflow finishes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    /// Replacement task list, when a refetch succeeded
    pub tasks: Option<Vec<Task>>,
    pub notices: Vec<Notice>,
    pub close_task_modal: bool,
    pub close_confirm: bool,
}

impl Outcome {
    fn notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            ..Default::default()
        }
    }
}

// ========================
// Task Form
// ========================

/// Contents of the create/edit modal. `id` is set when editing.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub id: Option<u64>,
    pub title: String,
    pub description: String,
    pub priority: u8,
    pub status: bool,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium.level(),
            status: false,
        }
    }
}

impl TaskForm {
    pub fn edit(task: &Task) -> Self {
        Self {
            id: Some(task.id),
            title: task.task.clone(),
            description: task.description.clone(),
            priority: task.priority,
            status: task.status,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn payload(&self) -> Result<TaskPayload, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(TaskPayload {
            task: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            status: self.status,
        })
    }
}

// ========================
// Confirmation
// ========================

/// Destructive action waiting on the confirm modal
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    DeleteTask(u64),
    ClearCompleted(Vec<u64>),
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteTask(_) => "Delete Task",
            ConfirmAction::ClearCompleted(_) => "Clear Completed Tasks",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteTask(_) => {
                "Are you sure you want to delete this task? This action cannot be undone.".to_string()
            }
            ConfirmAction::ClearCompleted(ids) => format!(
                "Are you sure you want to delete {} completed task(s)? This action cannot be undone.",
                ids.len()
            ),
        }
    }
}

/// Nothing to clear yields a notice instead of a confirmation
pub fn prepare_clear_completed(tasks: &[Task]) -> Result<ConfirmAction, Notice> {
    let ids: Vec<u64> = tasks.iter().filter(|t| t.status).map(|t| t.id).collect();
    if ids.is_empty() {
        Err(Notice::info("No completed tasks to clear"))
    } else {
        Ok(ConfirmAction::ClearCompleted(ids))
    }
}

// ========================
// Workflows
// ========================

/// Refetch the full collection into `outcome`
async fn reload<T, S>(client: &ApiClient<T, S>, outcome: &mut Outcome)
where
    T: Transport,
    S: KeyValueStore,
{
    match client.list_tasks().await {
        Ok(tasks) => outcome.tasks = Some(tasks),
        Err(e) => {
            log::error!("Error loading tasks: {}", e);
            outcome.notices.push(Notice::error("Failed to load tasks", e.to_string()));
        }
    }
}

/// Create when the form has no id, update otherwise
pub async fn submit_task_form<T, S>(client: &ApiClient<T, S>, form: &TaskForm) -> Outcome
where
    T: Transport,
    S: KeyValueStore,
{
    let payload = match form.payload() {
        Ok(payload) => payload,
        Err(e) => return Outcome::notice(Notice::new(NoticeKind::Error, e.to_string(), None)),
    };

    let (result, verb) = match form.id {
        Some(id) => (client.update_task(id, &payload).await, "update"),
        None => (client.create_task(&payload).await, "create"),
    };

    match result {
        Ok(task) => {
            log::debug!("Task {} {}d", task.id, verb);
            let notice = Notice::success(format!("Task {}d successfully!", verb));
            let mut outcome = Outcome::notice(notice);
            reload(client, &mut outcome).await;
            outcome.close_task_modal = true;
            outcome
        }
        Err(e) => {
            log::error!("Error on task {}: {}", verb, e);
            Outcome::notice(Notice::error(format!("Failed to {} task", verb), e.to_string()))
        }
    }
}

/// Invert `status`, send every other field unchanged. No title check: the
/// task came from the server as-is.
pub async fn toggle_status<T, S>(client: &ApiClient<T, S>, tasks: &[Task], id: u64) -> Outcome
where
    T: Transport,
    S: KeyValueStore,
{
    let Some(task) = tasks.iter().find(|t| t.id == id) else {
        return Outcome::notice(Notice::error("Failed to update task status", "Task not found"));
    };
    let mut payload = task.to_payload();
    payload.status = !task.status;

    match client.update_task(id, &payload).await {
        Ok(_) => {
            log::debug!("Task {} status set to {}", id, payload.status);
            let mut outcome = Outcome::notice(Notice::success("Task updated successfully!"));
            reload(client, &mut outcome).await;
            outcome
        }
        Err(e) => {
            log::error!("Error toggling task {}: {}", id, e);
            Outcome::notice(Notice::error("Failed to update task status", e.to_string()))
        }
    }
}

pub async fn delete_task<T, S>(client: &ApiClient<T, S>, id: u64) -> Outcome
where
    T: Transport,
    S: KeyValueStore,
{
    match client.delete_task(id).await {
        Ok(()) => {
            let mut outcome = Outcome::notice(Notice::success("Task deleted successfully!"));
            reload(client, &mut outcome).await;
            outcome.close_confirm = true;
            outcome
        }
        Err(e) => {
            log::error!("Error deleting task {}: {}", id, e);
            Outcome::notice(Notice::error("Failed to delete task", e.to_string()))
        }
    }
}

/// Delete all `ids` concurrently, then refetch once
pub async fn clear_completed<T, S>(client: &ApiClient<T, S>, ids: &[u64]) -> Outcome
where
    T: Transport,
    S: KeyValueStore,
{
    if ids.is_empty() {
        return Outcome::notice(Notice::info("No completed tasks to clear"));
    }

    let results = join_all(ids.iter().map(|&id| client.delete_task(id))).await;
    let failed = results.iter().filter(|r| r.is_err()).count();

    let mut outcome = if failed == 0 {
        Outcome {
            notices: vec![Notice::success("All completed tasks cleared!")],
            close_confirm: true,
            ..Default::default()
        }
    } else {
        log::error!("Clear completed: {} of {} deletes failed", failed, ids.len());
        Outcome::notice(Notice::new(NoticeKind::Error, "Failed to clear some tasks", None))
    };
    reload(client, &mut outcome).await;
    outcome
}

pub async fn run_confirmed<T, S>(client: &ApiClient<T, S>, action: &ConfirmAction) -> Outcome
where
    T: Transport,
    S: KeyValueStore,
{
    match action {
        ConfirmAction::DeleteTask(id) => delete_task(client, *id).await,
        ConfirmAction::ClearCompleted(ids) => clear_completed(client, ids).await,
    }
}

// ========================
// Session Actions
// ========================

pub fn logout<S: KeyValueStore>(store: &S) -> Notice {
    session::clear_credential(store);
    log::info!("Logged out");
    Notice::info("Logged out successfully")
}

pub fn toggle_theme<S: KeyValueStore>(store: &S, current: Theme) -> (Theme, Notice) {
    let next = current.toggled();
    session::save_theme(store, next);
    (next, Notice::info(format!("Switched to {} theme", next.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiRequest, ApiResponse, Body, Method};
    use crate::config::AppConfig;
    use crate::error::ApiResult;
    use crate::testing::{client, sample_task, MemoryStorage, MockTransport};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn form(title: &str) -> TaskForm {
        TaskForm {
            title: title.into(),
            description: "details".into(),
            priority: 3,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_title_rejected_before_network() {
        let transport = MockTransport::new();
        let api = client(&transport, Some("tok"));

        let outcome = submit_task_form(&api, &form("   ")).await;

        assert!(transport.requests().is_empty());
        assert_eq!(outcome.notices[0].title, "Task title is required");
        assert!(!outcome.close_task_modal);
        assert_eq!(outcome.tasks, None);
    }

    #[tokio::test]
    async fn test_create_refetches_and_closes_modal() {
        let transport = MockTransport::new();
        transport.push_json(200, &sample_task(6, false, 3));
        transport.push_json(200, &vec![sample_task(6, false, 3)]);
        let api = client(&transport, Some("tok"));

        let outcome = submit_task_form(&api, &form("New one")).await;

        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!((sent[0].method, sent[0].url.as_str()), (Method::Post, "http://api.test/tasks/"));
        assert_eq!((sent[1].method, sent[1].url.as_str()), (Method::Get, "http://api.test/tasks/"));
        assert!(outcome.close_task_modal);
        assert_eq!(outcome.tasks.unwrap().len(), 1);
        assert_eq!(outcome.notices, vec![Notice::success("Task created successfully!")]);
    }

    #[tokio::test]
    async fn test_update_goes_to_put() {
        let transport = MockTransport::new();
        transport.push_json(200, &sample_task(2, false, 3));
        transport.push_json(200, &vec![sample_task(2, false, 3)]);
        let api = client(&transport, Some("tok"));
        let mut edit = form("Renamed");
        edit.id = Some(2);

        let outcome = submit_task_form(&api, &edit).await;

        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!((sent[0].method, sent[0].url.as_str()), (Method::Put, "http://api.test/tasks/2"));
        assert_eq!((sent[1].method, sent[1].url.as_str()), (Method::Get, "http://api.test/tasks/"));
        assert_eq!(outcome.tasks, Some(vec![sample_task(2, false, 3)]));
        assert!(outcome.close_task_modal);
        assert_eq!(outcome.notices[0].title, "Task updated successfully!");
    }

    #[tokio::test]
    async fn test_failed_create_keeps_state_and_modal() {
        let transport = MockTransport::new();
        transport.push_raw(422, r#"{"detail":"Priority must be between 1 and 5"}"#);
        let api = client(&transport, Some("tok"));

        let outcome = submit_task_form(&api, &form("x")).await;

        assert_eq!(transport.requests().len(), 1);
        assert_eq!(outcome.tasks, None);
        assert!(!outcome.close_task_modal);
        assert_eq!(
            outcome.notices,
            vec![Notice::error("Failed to create task", "Priority must be between 1 and 5")]
        );
    }

    #[tokio::test]
    async fn test_toggle_inverts_only_status() {
        let transport = MockTransport::new();
        let original = sample_task(3, false, 1);
        transport.push_json(200, &original);
        transport.push_json(200, &vec![original.clone()]);
        let api = client(&transport, Some("tok"));

        let outcome = toggle_status(&api, &[original.clone()], 3).await;

        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!((sent[0].method, sent[0].url.as_str()), (Method::Put, "http://api.test/tasks/3"));
        assert_eq!((sent[1].method, sent[1].url.as_str()), (Method::Get, "http://api.test/tasks/"));
        assert_eq!(outcome.tasks, Some(vec![original.clone()]));
        assert_eq!(outcome.notices, vec![Notice::success("Task updated successfully!")]);
        let Body::Json(json) = &sent[0].body else {
            panic!("expected JSON body");
        };
        let sent_payload: TaskPayload = serde_json::from_str(json).unwrap();
        let mut expected = original.to_payload();
        expected.status = true;
        assert_eq!(sent_payload, expected);
    }

    #[tokio::test]
    async fn test_toggle_blank_title_still_sends_update() {
        let transport = MockTransport::new();
        let mut untitled = sample_task(3, false, 1);
        untitled.task = "  ".into();
        transport.push_json(200, &untitled);
        transport.push_json(200, &vec![untitled.clone()]);
        let api = client(&transport, Some("tok"));

        let outcome = toggle_status(&api, &[untitled.clone()], 3).await;

        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        let Body::Json(json) = &sent[0].body else {
            panic!("expected JSON body");
        };
        let sent_payload: TaskPayload = serde_json::from_str(json).unwrap();
        assert_eq!(sent_payload.task, "  ");
        assert!(sent_payload.status);
        assert!(outcome.tasks.is_some());
    }

    #[tokio::test]
    async fn test_toggle_failure_uses_status_title() {
        let transport = MockTransport::new();
        transport.push_raw(404, r#"{"detail":"Task not found"}"#);
        let api = client(&transport, Some("tok"));

        let outcome = toggle_status(&api, &[sample_task(3, false, 1)], 3).await;

        assert_eq!(transport.requests().len(), 1);
        assert_eq!(outcome.tasks, None);
        assert_eq!(
            outcome.notices,
            vec![Notice::error("Failed to update task status", "Task not found")]
        );
    }

    #[tokio::test]
    async fn test_toggle_unknown_task_sends_nothing() {
        let transport = MockTransport::new();
        let api = client(&transport, Some("tok"));

        let outcome = toggle_status(&api, &[sample_task(1, false, 2)], 42).await;

        assert!(transport.requests().is_empty());
        assert_eq!(outcome.notices[0].message.as_deref(), Some("Task not found"));
    }

    #[tokio::test]
    async fn test_delete_refetches_and_closes_confirm() {
        let transport = MockTransport::new();
        transport.push_raw(200, r#"{"message":"Task deleted successfully"}"#);
        transport.push_json(200, &Vec::<Task>::new());
        let api = client(&transport, Some("tok"));

        let outcome = delete_task(&api, 8).await;

        assert_eq!(transport.requests()[0].method, Method::Delete);
        assert_eq!(outcome.tasks, Some(vec![]));
        assert!(outcome.close_confirm);
    }

    #[tokio::test]
    async fn test_refetch_failure_keeps_previous_list() {
        let transport = MockTransport::new();
        transport.push_raw(200, "{}");
        transport.push_raw(500, "");
        let api = client(&transport, Some("tok"));

        let outcome = delete_task(&api, 8).await;

        assert_eq!(outcome.tasks, None);
        assert_eq!(outcome.notices.len(), 2);
        assert_eq!(outcome.notices[1].title, "Failed to load tasks");
    }

    #[test]
    fn test_clear_with_nothing_completed_is_informational() {
        let tasks = vec![sample_task(1, false, 2)];
        assert_eq!(
            prepare_clear_completed(&tasks),
            Err(Notice::info("No completed tasks to clear"))
        );
    }

    #[test]
    fn test_clear_confirmation_lists_completed_ids() {
        let tasks = vec![sample_task(1, true, 2), sample_task(2, false, 2), sample_task(3, true, 1)];
        let action = prepare_clear_completed(&tasks).unwrap();
        assert_eq!(action, ConfirmAction::ClearCompleted(vec![1, 3]));
        assert!(action.message().contains("delete 2 completed task(s)"));
    }

    #[tokio::test]
    async fn test_clear_zero_ids_issues_no_deletes() {
        let transport = MockTransport::new();
        let api = client(&transport, Some("tok"));

        let outcome = clear_completed(&api, &[]).await;

        assert!(transport.requests().is_empty());
        assert_eq!(outcome.notices[0].kind, NoticeKind::Info);
    }

    #[tokio::test]
    async fn test_clear_reports_failure_if_any_delete_fails() {
        let transport = MockTransport::new();
        transport.push_raw(200, "{}");
        transport.push_raw(404, r#"{"detail":"Task not found"}"#);
        transport.push_raw(200, "{}");
        transport.push_json(200, &Vec::<Task>::new());
        let api = client(&transport, Some("tok"));

        let outcome = clear_completed(&api, &[1, 2, 3]).await;

        let deletes = transport.requests().iter().filter(|r| r.method == Method::Delete).count();
        assert_eq!(deletes, 3);
        assert_eq!(outcome.notices[0].title, "Failed to clear some tasks");
        assert!(!outcome.close_confirm);
        assert_eq!(outcome.tasks, Some(vec![]));
    }

    /// Holds every DELETE open for one scheduler turn and tracks peak concurrency
    #[derive(Clone, Default)]
    struct GateTransport {
        in_flight: Rc<Cell<usize>>,
        peak: Rc<Cell<usize>>,
        deletes: Rc<Cell<usize>>,
    }

    #[async_trait(?Send)]
    impl Transport for GateTransport {
        async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
            if request.method == Method::Get {
                return Ok(ApiResponse { status: 200, body: "[]".into() });
            }
            self.deletes.set(self.deletes.get() + 1);
            self.in_flight.set(self.in_flight.get() + 1);
            self.peak.set(self.peak.get().max(self.in_flight.get()));
            tokio::task::yield_now().await;
            self.in_flight.set(self.in_flight.get() - 1);
            Ok(ApiResponse { status: 200, body: "{}".into() })
        }
    }

    #[tokio::test]
    async fn test_clear_issues_deletes_concurrently() {
        let transport = GateTransport::default();
        let api = ApiClient::new(transport.clone(), MemoryStorage::default(), &AppConfig::default());

        let outcome = clear_completed(&api, &[1, 2, 3, 4]).await;

        assert_eq!(transport.deletes.get(), 4);
        assert_eq!(transport.peak.get(), 4);
        assert_eq!(outcome.notices, vec![Notice::success("All completed tasks cleared!")]);
        assert!(outcome.close_confirm);
    }

    #[test]
    fn test_logout_clears_credential() {
        let store = MemoryStorage::default();
        session::save_credential(
            &store,
            &crate::models::Credential {
                access_token: "t".into(),
                token_type: "Bearer".into(),
            },
        );
        let notice = logout(&store);
        assert!(!session::has_credential(&store));
        assert_eq!(notice.title, "Logged out successfully");
    }

    #[test]
    fn test_toggle_theme_persists() {
        let store = MemoryStorage::default();
        let (next, notice) = toggle_theme(&store, Theme::Light);
        assert_eq!(next, Theme::Dark);
        assert_eq!(session::load_theme(&store), Theme::Dark);
        assert_eq!(notice.title, "Switched to dark theme");
    }
}
