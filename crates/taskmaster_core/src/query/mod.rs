//! Derived task-list views.
//!
//! # Responsibility
//! - Compute filtered subsets of the collection without mutating it.
//!
//! # Invariants
//! - Filtering preserves input order and is free of hidden state.

pub mod filter;
