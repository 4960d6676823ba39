//! Task store contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Provide the CRUD surface every caller goes through.
//! - Keep collection invariants (id uniqueness, insertion order) inside
//!   the store boundary.
//!
//! # Invariants
//! - State is process-local and ephemeral; there is no persistence layer.
//! - Readers only ever receive cloned snapshots.

pub mod task_repo;
