//! View Projections
//!
//! Pure functions from the task list (plus filter and search text) to what
//! a section displays. Recomputed on every change; nothing is cached.

use crate::models::{Priority, Section, Task, TaskFilter};

pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    let keep = |task: &&Task| match filter {
        TaskFilter::All => true,
        TaskFilter::Pending => !task.status,
        TaskFilter::Completed => task.status,
        TaskFilter::High => task.priority == Priority::High.level(),
        TaskFilter::Medium => task.priority == Priority::Medium.level(),
        TaskFilter::Low => task.priority == Priority::Low.level(),
    };
    tasks.iter().filter(keep).cloned().collect()
}

/// "Today" has no dates to go on, so it is every pending task
pub fn today_tasks(tasks: &[Task]) -> Vec<Task> {
    filter_tasks(tasks, TaskFilter::Pending)
}

pub fn important_tasks(tasks: &[Task]) -> Vec<Task> {
    filter_tasks(tasks, TaskFilter::High)
}

pub fn completed_tasks(tasks: &[Task]) -> Vec<Task> {
    filter_tasks(tasks, TaskFilter::Completed)
}

/// Case-insensitive match on title or description. Blank query matches all.
pub fn search_tasks(tasks: &[Task], query: &str) -> Vec<Task> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return tasks.to_vec();
    }
    tasks
        .iter()
        .filter(|t| {
            t.task.to_lowercase().contains(&query) || t.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Tasks listed in a section. The dropdown filter only applies to "All Tasks";
/// a non-blank search replaces the section's own projection.
pub fn section_tasks(
    tasks: &[Task],
    section: Section,
    filter: TaskFilter,
    search: &str,
) -> Vec<Task> {
    if !search.trim().is_empty() && section != Section::Dashboard {
        return search_tasks(tasks, search);
    }
    match section {
        Section::Dashboard => Vec::new(),
        Section::Tasks => filter_tasks(tasks, filter),
        Section::Today => today_tasks(tasks),
        Section::Important => important_tasks(tasks),
        Section::Completed => completed_tasks(tasks),
    }
}

/// Newest first by id, at most `limit`
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));
    sorted.truncate(limit);
    sorted
}

/// Sidebar and dashboard numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub today: usize,
    pub important: usize,
    pub completed: usize,
    pub pending: usize,
    /// Rounded to the nearest whole percent; 0 for an empty list
    pub completed_percentage: u32,
}

impl TaskCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.status).count();
        let important = tasks.iter().filter(|t| t.priority == Priority::High.level()).count();
        let pending = total - completed;
        let completed_percentage = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            total,
            today: pending,
            important,
            completed,
            pending,
            completed_percentage,
        }
    }

    /// Badge shown next to a sidebar entry
    pub fn for_section(&self, section: Section) -> Option<usize> {
        match section {
            Section::Dashboard => None,
            Section::Tasks => Some(self.total),
            Section::Today => Some(self.today),
            Section::Important => Some(self.important),
            Section::Completed => Some(self.completed),
        }
    }
}

/// (heading, hint) for an empty list
pub fn empty_state(section: Section) -> (&'static str, &'static str) {
    match section {
        Section::Dashboard => ("No tasks yet", "Create your first task to get started!"),
        _ => ("No tasks found", "Create a new task to get started!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo_tasks;
    use crate::testing::sample_task;
    use pretty_assertions::assert_eq;

    fn ids(tasks: &[Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id).collect()
    }

    fn mixed() -> Vec<Task> {
        vec![
            sample_task(1, false, 3),
            sample_task(2, true, 3),
            sample_task(3, false, 2),
            sample_task(4, true, 1),
            sample_task(5, false, 5),
        ]
    }

    #[test]
    fn test_high_filter_is_exactly_priority_three() {
        assert_eq!(ids(&filter_tasks(&mixed(), TaskFilter::High)), vec![1, 2]);
    }

    #[test]
    fn test_completed_filter_is_exactly_status_true() {
        assert_eq!(ids(&filter_tasks(&mixed(), TaskFilter::Completed)), vec![2, 4]);
        assert_eq!(ids(&filter_tasks(&mixed(), TaskFilter::Pending)), vec![1, 3, 5]);
    }

    #[test]
    fn test_out_of_range_priority_matches_no_priority_filter() {
        let tasks = mixed();
        for filter in [TaskFilter::High, TaskFilter::Medium, TaskFilter::Low] {
            assert!(!ids(&filter_tasks(&tasks, filter)).contains(&5));
        }
        assert_eq!(filter_tasks(&tasks, TaskFilter::All).len(), 5);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let tasks = demo_tasks();
        assert_eq!(ids(&search_tasks(&tasks, "  PROPOSAL ")), vec![1]);
        assert_eq!(ids(&search_tasks(&tasks, "client")), vec![1, 3]);
        assert_eq!(search_tasks(&tasks, "   ").len(), 5);
    }

    #[test]
    fn test_section_projection() {
        let tasks = mixed();
        assert_eq!(ids(&section_tasks(&tasks, Section::Today, TaskFilter::All, "")), vec![1, 3, 5]);
        assert_eq!(ids(&section_tasks(&tasks, Section::Important, TaskFilter::Low, "")), vec![1, 2]);
        assert_eq!(ids(&section_tasks(&tasks, Section::Tasks, TaskFilter::Low, "")), vec![4]);
        assert_eq!(ids(&section_tasks(&tasks, Section::Completed, TaskFilter::All, "task 4")), vec![4]);
    }

    #[test]
    fn test_recent_is_id_descending_and_capped() {
        let tasks: Vec<Task> = (1..=7).map(|i| sample_task(i, false, 2)).collect();
        assert_eq!(ids(&recent_tasks(&tasks, 5)), vec![7, 6, 5, 4, 3]);
        assert!(recent_tasks(&[], 5).is_empty());
    }

    #[test]
    fn test_counts() {
        let counts = TaskCounts::of(&mixed());
        assert_eq!(
            counts,
            TaskCounts {
                total: 5,
                today: 3,
                important: 2,
                completed: 2,
                pending: 3,
                completed_percentage: 40,
            }
        );
        assert_eq!(counts.for_section(Section::Dashboard), None);
        assert_eq!(TaskCounts::of(&[]).completed_percentage, 0);
    }

    #[test]
    fn test_percentage_rounds() {
        let tasks = vec![sample_task(1, true, 2), sample_task(2, true, 2), sample_task(3, false, 2)];
        assert_eq!(TaskCounts::of(&tasks).completed_percentage, 67);
    }
}
