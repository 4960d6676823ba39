//! Search/priority/status filtering over the task collection.
//!
//! # Responsibility
//! - Provide the combined filter predicate used by the task-list view.
//!
//! # Invariants
//! - Input order is preserved; the store is never mutated.
//! - The three criteria are ANDed; an absent criterion matches everything.

use crate::model::task::{Priority, Task};

/// Completion-state filter for list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Keep only completed tasks.
    Completed,
    /// Keep only tasks still open.
    Pending,
}

/// Combined filter criteria.
///
/// `Default` is the match-all query: empty search term, no priority or
/// status constraint.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    /// Case-insensitive substring matched against title OR description.
    /// Blank (empty or whitespace-only) matches every task.
    pub search_term: String,
    /// Exact priority match when present.
    pub priority: Option<Priority>,
    /// Completion-state constraint when present.
    pub status: Option<StatusFilter>,
}

impl TaskQuery {
    /// Creates a search-only query with no priority/status constraint.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..Self::default()
        }
    }

    /// Returns whether one task satisfies all criteria.
    pub fn matches(&self, task: &Task) -> bool {
        matches_search(task, self.search_term.trim())
            && self.priority.map_or(true, |priority| task.priority == priority)
            && self.status.map_or(true, |status| match status {
                StatusFilter::Completed => task.completed,
                StatusFilter::Pending => !task.completed,
            })
    }
}

/// Filters the collection, preserving input order.
pub fn filter_tasks(tasks: &[Task], query: &TaskQuery) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| query.matches(task))
        .cloned()
        .collect()
}

fn matches_search(task: &Task, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task.description.to_lowercase().contains(&needle)
}
