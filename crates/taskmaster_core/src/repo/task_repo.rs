//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the ordered task collection.
//! - Reject writes that would break collection invariants before any
//!   state changes.
//!
//! # Invariants
//! - Ids are unique within the collection at all times.
//! - Insertion order is preserved for iteration; add appends at the end.
//! - Every mutation is all-or-nothing from the caller's perspective.

use crate::model::task::{Task, TaskId, TaskPatch, TaskValidationError};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Store-level error for task collection operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    NotFound(TaskId),
    DuplicateId(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::DuplicateId(id) => write!(f, "task id already present: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    /// Appends one task; rejects duplicate ids.
    fn insert(&mut self, task: Task) -> RepoResult<TaskId>;
    /// Returns a cloned task by id.
    fn get(&self, id: TaskId) -> Option<Task>;
    /// Returns a cloned snapshot of the whole collection in insertion order.
    fn list(&self) -> Vec<Task>;
    /// Merges present patch fields into the task with that id.
    fn update(&mut self, id: TaskId, patch: &TaskPatch) -> RepoResult<Task>;
    /// Flips the completion flag of the task with that id.
    fn toggle_completed(&mut self, id: TaskId) -> RepoResult<Task>;
    /// Deletes the task with that id; returns whether a deletion occurred.
    fn remove(&mut self, id: TaskId) -> bool;
    /// Replaces the whole collection; current state is untouched on error.
    fn replace_all(&mut self, tasks: Vec<Task>) -> RepoResult<()>;
    /// Number of tasks currently held.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Owned in-memory task collection.
///
/// The only repository implementation: the collection lives for the session
/// and is lost when the process ends.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-filled with the given tasks.
    ///
    /// Rejects the whole batch when any task fails validation or any id
    /// repeats.
    pub fn with_tasks(tasks: Vec<Task>) -> RepoResult<Self> {
        validate_batch(&tasks)?;
        Ok(Self { tasks })
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn insert(&mut self, task: Task) -> RepoResult<TaskId> {
        task.validate()?;
        if self.position(task.id).is_some() {
            return Err(RepoError::DuplicateId(task.id));
        }

        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    fn get(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id == id).cloned()
    }

    fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn update(&mut self, id: TaskId, patch: &TaskPatch) -> RepoResult<Task> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        self.tasks[index].apply_patch(patch)?;
        Ok(self.tasks[index].clone())
    }

    fn toggle_completed(&mut self, id: TaskId) -> RepoResult<Task> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        self.tasks[index].completed = !self.tasks[index].completed;
        Ok(self.tasks[index].clone())
    }

    fn remove(&mut self, id: TaskId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    fn replace_all(&mut self, tasks: Vec<Task>) -> RepoResult<()> {
        validate_batch(&tasks)?;
        self.tasks = tasks;
        Ok(())
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}

/// Checks record validity and id uniqueness for a whole batch.
pub(crate) fn validate_batch(tasks: &[Task]) -> RepoResult<()> {
    let mut seen = BTreeSet::new();
    for task in tasks {
        task.validate()?;
        if !seen.insert(task.id) {
            return Err(RepoError::DuplicateId(task.id));
        }
    }
    Ok(())
}
