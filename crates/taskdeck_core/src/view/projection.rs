//! Pure projections: filter modes and summary counts.

use crate::model::task::Task;

/// Which subset of the collection a view displays.
///
/// Held in memory by the presentation layer and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Default for Filter {
    fn default() -> Self {
        Self::All
    }
}

impl Filter {
    /// Stable string form for UI mode binding.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Parses the string form produced by `as_str`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Summary counts over one collection state.
///
/// `active + completed == total` holds for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub active: usize,
    pub completed: usize,
    pub total: usize,
}

/// Returns the tasks visible under `filter`, preserving source order.
pub fn filter_tasks(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| match filter {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        })
        .collect()
}

/// Counts active, completed and total tasks in one pass.
pub fn summarize(tasks: &[Task]) -> Summary {
    let completed = tasks.iter().filter(|task| task.completed).count();
    Summary {
        active: tasks.len() - completed,
        completed,
        total: tasks.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_tasks, summarize, Filter};
    use crate::model::task::Task;

    fn sample() -> Vec<Task> {
        let mut done = Task::new("write report", "", "2024-03-01");
        done.completed = true;
        vec![
            Task::new("buy milk", "two liters", ""),
            done,
            Task::new("water plants", "", ""),
        ]
    }

    #[test]
    fn all_filter_returns_input_in_order() {
        let tasks = sample();
        let view = filter_tasks(&tasks, Filter::All);
        assert_eq!(view.len(), 3);
        assert_eq!(view[0].id, tasks[0].id);
        assert_eq!(view[1].id, tasks[1].id);
        assert_eq!(view[2].id, tasks[2].id);
    }

    #[test]
    fn active_and_completed_split_preserves_relative_order() {
        let tasks = sample();

        let active = filter_tasks(&tasks, Filter::Active);
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].id, tasks[0].id);
        assert_eq!(active[1].id, tasks[2].id);

        let completed = filter_tasks(&tasks, Filter::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, tasks[1].id);
    }

    #[test]
    fn summary_counts_add_up() {
        let tasks = sample();
        let summary = summarize(&tasks);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.active + summary.completed, summary.total);
    }

    #[test]
    fn summary_of_empty_collection_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.active, 0);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn filter_string_binding_round_trips() {
        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            assert_eq!(Filter::parse(filter.as_str()), Some(filter));
        }
        assert_eq!(Filter::parse("archived"), None);
        assert_eq!(Filter::default(), Filter::All);
    }
}
