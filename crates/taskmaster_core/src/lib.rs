//! Core domain logic for TaskMaster.
//! This crate is the single source of truth for task-collection invariants.

pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod seed;
pub mod service;
pub mod settings;
pub mod snapshot;
pub mod stats;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskDraft, TaskId, TaskPatch, TaskValidationError};
pub use query::filter::{filter_tasks, StatusFilter, TaskQuery};
pub use repo::task_repo::{InMemoryTaskRepository, RepoError, RepoResult, TaskRepository};
pub use seed::sample_tasks;
pub use service::task_service::TaskService;
pub use settings::{TaskDefaults, SUGGESTED_CATEGORIES};
pub use snapshot::{Snapshot, SnapshotError};
pub use stats::{
    compute_statistics, dashboard_summary, week_end, CategorySlice, DashboardSummary,
    PriorityBreakdown, PrioritySlice, TaskStatistics, RECENT_TASKS_LIMIT,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
