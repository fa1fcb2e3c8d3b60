//! Domain model for the task tracker.
//!
//! # Responsibility
//! - Define the canonical task record used by session and view logic.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard removal from the collection, not a tombstone.

pub mod task;
