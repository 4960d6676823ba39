//! Domain model for the task collection.
//!
//! # Responsibility
//! - Define the canonical task record used by all core components.
//! - Own create/update input shapes and their validation.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - A task accepted through the create/update path has a non-empty title.

pub mod task;
