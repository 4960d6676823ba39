//! Task use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for user actions.
//! - Stamp fresh ids and creation dates on the create path.
//! - Gate snapshot import so prior state survives rejected payloads.
//!
//! # Invariants
//! - `created_at` is today's local date at the moment of creation.
//! - Every mutation is logged with a structured event line.

use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::repo::task_repo::{RepoResult, TaskRepository};
use crate::snapshot::{self, SnapshotError};
use chrono::Local;
use log::{info, warn};

/// Use-case service wrapper for task CRUD and snapshot operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new task from a draft.
    ///
    /// # Contract
    /// - Rejects a blank title; nothing is stored on failure.
    /// - Assigns a fresh unique id and today's date as `created_at`.
    /// - The new task starts pending and is appended at the end.
    pub fn add_task(&mut self, draft: TaskDraft) -> RepoResult<Task> {
        let task = Task::new(draft, Local::now().date_naive())?;
        match self.repo.insert(task.clone()) {
            Ok(id) => {
                info!(
                    "event=task_created module=service status=ok id={id} priority={} due={}",
                    task.priority, task.due_date
                );
                Ok(task)
            }
            Err(err) => {
                warn!("event=task_created module=service status=error error={err}");
                Err(err)
            }
        }
    }

    /// Merges field changes into an existing task.
    ///
    /// The id and creation date are immutable; absent patch fields are
    /// left untouched.
    pub fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> RepoResult<Task> {
        match self.repo.update(id, patch) {
            Ok(task) => {
                info!("event=task_updated module=service status=ok id={id}");
                Ok(task)
            }
            Err(err) => {
                warn!("event=task_updated module=service status=error id={id} error={err}");
                Err(err)
            }
        }
    }

    /// Flips the completion flag of one task.
    pub fn toggle_completed(&mut self, id: TaskId) -> RepoResult<Task> {
        match self.repo.toggle_completed(id) {
            Ok(task) => {
                info!(
                    "event=task_toggled module=service status=ok id={id} completed={}",
                    task.completed
                );
                Ok(task)
            }
            Err(err) => {
                warn!("event=task_toggled module=service status=error id={id} error={err}");
                Err(err)
            }
        }
    }

    /// Deletes one task; returns whether a deletion occurred.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let removed = self.repo.remove(id);
        info!("event=task_removed module=service status=ok id={id} removed={removed}");
        removed
    }

    /// Gets one task by stable id.
    pub fn get_task(&self, id: TaskId) -> Option<Task> {
        self.repo.get(id)
    }

    /// Returns the collection snapshot in insertion order.
    pub fn list_tasks(&self) -> Vec<Task> {
        self.repo.list()
    }

    /// Number of tasks currently held.
    pub fn task_count(&self) -> usize {
        self.repo.len()
    }

    /// Serializes the current collection as pretty-printed JSON.
    pub fn export_snapshot(&self) -> Result<String, SnapshotError> {
        snapshot::export(&self.repo.list())
    }

    /// Replaces the collection with a parsed snapshot payload.
    ///
    /// # Contract
    /// - Malformed or invariant-breaking payloads are rejected and the
    ///   existing collection stays exactly as it was.
    /// - Returns the number of imported tasks on success.
    pub fn import_snapshot(&mut self, payload: &str) -> Result<usize, SnapshotError> {
        let tasks = match snapshot::import(payload) {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!("event=snapshot_imported module=service status=error error={err}");
                return Err(err);
            }
        };

        let count = tasks.len();
        self.repo.replace_all(tasks)?;
        info!("event=snapshot_imported module=service status=ok count={count}");
        Ok(count)
    }
}
