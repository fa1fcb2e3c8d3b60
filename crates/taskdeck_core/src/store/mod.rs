//! Persistence layer for the task collection.
//!
//! # Responsibility
//! - Define the load/save contract over the durable slot.
//! - Isolate SQLite and serialization details from session logic.
//!
//! # Invariants
//! - A save always replaces the whole slot value, never a fragment.
//! - An absent slot reads as an empty collection, not as an error.

pub mod task_store;
