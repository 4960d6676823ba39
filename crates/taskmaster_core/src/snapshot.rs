//! JSON snapshot of the in-memory collection.
//!
//! # Responsibility
//! - Serialize the task list to JSON and parse it back with the same shape.
//! - Reject malformed or invariant-breaking payloads before any state
//!   could be replaced (fail closed).
//!
//! # Invariants
//! - `import` never returns a batch with a blank title or a repeated id.
//! - A failed import leaves the caller's prior state untouched; replacement
//!   is the caller's final step after validation.

use crate::model::task::Task;
use crate::repo::task_repo::{validate_batch, RepoError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire shape for exported task data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
}

/// Boundary error for snapshot export/import.
#[derive(Debug)]
pub enum SnapshotError {
    /// Payload is not valid JSON for the snapshot shape.
    Parse(serde_json::Error),
    /// Parsed payload violates collection invariants.
    Invalid(RepoError),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "malformed snapshot payload: {err}"),
            Self::Invalid(err) => write!(f, "snapshot rejected: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<RepoError> for SnapshotError {
    fn from(value: RepoError) -> Self {
        Self::Invalid(value)
    }
}

/// Serializes the task list as pretty-printed JSON.
pub fn export(tasks: &[Task]) -> Result<String, SnapshotError> {
    let snapshot = Snapshot {
        tasks: tasks.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Parses and validates a snapshot payload.
///
/// Returns the task list only when every record is valid and all ids are
/// unique; any failure leaves nothing for the caller to apply.
pub fn import(payload: &str) -> Result<Vec<Task>, SnapshotError> {
    let snapshot: Snapshot = serde_json::from_str(payload)?;
    validate_batch(&snapshot.tasks)?;
    Ok(snapshot.tasks)
}
