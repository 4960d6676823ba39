//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its create/update input shapes.
//! - Enforce the non-empty-title invariant on every accepted write.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at` is set once at construction and never patched.
//! - `completed` starts as `false` for every new task.

use crate::settings::TaskDefaults;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task in the collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Urgency level attached to every task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Lowercase wire/display label for this priority.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation failure for task write inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Serialized field names follow the external snapshot schema
/// (`dueDate`/`createdAt`), matching the shape task data is exported in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable id assigned at creation; immutable.
    pub id: TaskId,
    /// Non-empty display title.
    pub title: String,
    /// Free-text body; may be empty.
    pub description: String,
    /// Completion flag; flipped by toggle or patched explicitly.
    pub completed: bool,
    pub priority: Priority,
    /// Calendar due date. `NaiveDate` ordering matches the chronological
    /// ordering of the ISO-8601 strings it serializes to.
    pub due_date: NaiveDate,
    /// Free-form label; see [`crate::settings::SUGGESTED_CATEGORIES`].
    pub category: String,
    /// Creation date; immutable across updates.
    pub created_at: NaiveDate,
}

impl Task {
    /// Builds a new task from a draft with a generated stable id.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - Rejects a blank title before any state is produced.
    pub fn new(draft: TaskDraft, created_at: NaiveDate) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), draft, created_at)
    }

    /// Builds a task with a caller-provided stable id.
    ///
    /// Used by seed and import paths where identity already exists.
    pub fn with_id(
        id: TaskId,
        draft: TaskDraft,
        created_at: NaiveDate,
    ) -> Result<Self, TaskValidationError> {
        if draft.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(Self {
            id,
            title: draft.title,
            description: draft.description,
            completed: false,
            priority: draft.priority,
            due_date: draft.due_date,
            category: draft.category,
            created_at,
        })
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Merges the present fields of `patch` into this task.
    ///
    /// `id` and `created_at` are not patchable. Validation happens before
    /// any field is written, so a rejected patch leaves the task untouched.
    pub fn apply_patch(&mut self, patch: &TaskPatch) -> Result<(), TaskValidationError> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(TaskValidationError::EmptyTitle);
            }
        }

        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        Ok(())
    }

    /// Returns whether this task is past due and still pending.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }
}

/// Create-path input for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub category: String,
}

impl TaskDraft {
    /// Creates a draft carrying the stock creation-form defaults
    /// (medium priority, `Work` category, empty description).
    pub fn new(title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self::with_defaults(title, due_date, &TaskDefaults::default())
    }

    /// Creates a draft carrying the given creation defaults.
    pub fn with_defaults(
        title: impl Into<String>,
        due_date: NaiveDate,
        defaults: &TaskDefaults,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: defaults.priority,
            due_date,
            category: defaults.category.clone(),
        }
    }
}

/// Update-path input: absent fields are left untouched.
///
/// There is intentionally no way to patch `id` or `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
}

impl TaskPatch {
    /// Returns whether this patch carries no field changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.category.is_none()
    }
}
