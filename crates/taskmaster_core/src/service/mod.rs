//! Use-case services over the task store.
//!
//! # Responsibility
//! - Provide the entry points user actions go through.
//! - Delegate collection mechanics to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - The service layer stays free of view/render concerns.

pub mod task_service;
