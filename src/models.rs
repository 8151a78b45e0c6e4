//! Frontend Models
//!
//! Data structures matching the REST backend, plus the small enums that
//! drive the views (filter, section, theme).

use serde::{Deserialize, Serialize};

/// Task as returned by `GET /tasks/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    /// Title
    pub task: String,
    #[serde(default)]
    pub description: String,
    pub priority: u8,
    #[serde(default)]
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,
}

impl Task {
    pub fn priority_level(&self) -> Priority {
        Priority::from_level(self.priority)
    }

    /// Body for `PUT /tasks/{id}`: everything but id and owner
    pub fn to_payload(&self) -> TaskPayload {
        TaskPayload {
            task: self.task.clone(),
            description: self.description.clone(),
            priority: self.priority,
            status: self.status,
        }
    }
}

/// JSON body for create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub task: String,
    pub description: String,
    pub priority: u8,
    pub status: bool,
}

/// Create/update responses come either bare or wrapped as `{ message, task }`.
/// The envelope's message is ignored; the UI shows its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TaskResponse {
    Wrapped { task: Task },
    Bare(Task),
}

impl TaskResponse {
    pub fn into_task(self) -> Task {
        match self {
            TaskResponse::Wrapped { task } => task,
            TaskResponse::Bare(task) => task,
        }
    }
}

/// Display priority. Levels outside 1..=3 show as medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn from_level(level: u8) -> Self {
        match level {
            1 => Priority::Low,
            3 => Priority::High,
            _ => Priority::Medium,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Bearer credential returned by `POST /users/token`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl Credential {
    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

/// JSON body for `POST /users/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Task list filter picked from the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
    High,
    Medium,
    Low,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 6] = [
        TaskFilter::All,
        TaskFilter::Pending,
        TaskFilter::Completed,
        TaskFilter::High,
        TaskFilter::Medium,
        TaskFilter::Low,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Pending => "pending",
            TaskFilter::Completed => "completed",
            TaskFilter::High => "high",
            TaskFilter::Medium => "medium",
            TaskFilter::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All Tasks",
            TaskFilter::Pending => "Pending",
            TaskFilter::Completed => "Completed",
            TaskFilter::High => "High Priority",
            TaskFilter::Medium => "Medium Priority",
            TaskFilter::Low => "Low Priority",
        }
    }
}

/// Content section shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Tasks,
    Today,
    Important,
    Completed,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Tasks,
        Section::Today,
        Section::Important,
        Section::Completed,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Tasks => "All Tasks",
            Section::Today => "Today",
            Section::Important => "Important",
            Section::Completed => "Completed",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Dashboard => "fas fa-home",
            Section::Tasks => "fas fa-list",
            Section::Today => "fas fa-calendar-day",
            Section::Important => "fas fa-star",
            Section::Completed => "fas fa-check-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than "dark" falls back to light
    pub fn parse(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle button (shows the theme you would switch to)
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

/// Fixed, non-persisted tasks shown to guests
pub fn demo_tasks() -> Vec<Task> {
    let demo = |id: u64, task: &str, description: &str, priority: u8, status: bool| Task {
        id,
        task: task.to_string(),
        description: description.to_string(),
        priority,
        status,
        owner_id: None,
    };
    vec![
        demo(
            1,
            "Complete project proposal",
            "Finalize the project proposal document and send it to the client for review.",
            3,
            false,
        ),
        demo(
            2,
            "Review team feedback",
            "Go through all the feedback received from team members on the recent project.",
            2,
            true,
        ),
        demo(
            3,
            "Schedule client meeting",
            "Set up a meeting with the client to discuss project requirements and timeline.",
            2,
            false,
        ),
        demo(
            4,
            "Update documentation",
            "Update all project documentation with the latest changes and improvements.",
            1,
            true,
        ),
        demo(
            5,
            "Prepare presentation",
            "Create slides for the upcoming quarterly business review presentation.",
            3,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_task_deserializes_with_owner() {
        let json = r#"{"id":7,"task":"Buy milk","description":"2L","priority":1,"status":false,"owner_id":3}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.owner_id, Some(3));
        assert_eq!(task.priority_level(), Priority::Low);
    }

    #[test]
    fn test_payload_drops_id_and_owner() {
        let task = Task {
            id: 9,
            task: "Write report".into(),
            description: "Q3".into(),
            priority: 3,
            status: true,
            owner_id: Some(1),
        };
        let value = serde_json::to_value(task.to_payload()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"task": "Write report", "description": "Q3", "priority": 3, "status": true})
        );
    }

    #[test]
    fn test_task_response_accepts_envelope_and_bare() {
        let wrapped = r#"{"message":"Task created successfully","task":{"id":1,"task":"a","description":"","priority":2,"status":false}}"#;
        let bare = r#"{"id":2,"task":"b","description":"","priority":2,"status":true}"#;

        let a: TaskResponse = serde_json::from_str(wrapped).unwrap();
        let b: TaskResponse = serde_json::from_str(bare).unwrap();
        assert_eq!(a.into_task().id, 1);
        assert_eq!(b.into_task().id, 2);
    }

    #[test]
    fn test_unknown_priority_shows_as_medium() {
        assert_eq!(Priority::from_level(5).name(), "medium");
        assert_eq!(Priority::from_level(0).name(), "medium");
        assert_eq!(Priority::from_level(3).name(), "high");
    }

    #[test]
    fn test_credential_header_defaults_to_bearer() {
        let cred: Credential = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(cred.header_value(), "Bearer abc");
    }

    #[test]
    fn test_filter_tags_are_unique() {
        let mut tags: Vec<&str> = TaskFilter::ALL.iter().map(|f| f.tag()).collect();
        tags.dedup();
        assert_eq!(tags, vec!["all", "pending", "completed", "high", "medium", "low"]);
    }

    #[test]
    fn test_demo_tasks_are_fixed() {
        let tasks = demo_tasks();
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks.iter().filter(|t| t.status).count(), 2);
        assert_eq!(tasks.iter().filter(|t| t.priority == 3).count(), 2);
        assert_eq!(tasks[0].task, "Complete project proposal");
    }

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("solarized"), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
