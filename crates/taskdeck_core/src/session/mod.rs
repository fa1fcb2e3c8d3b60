//! Session layer owning the live task collection.
//!
//! # Responsibility
//! - Hold the authoritative in-memory collection for the running session.
//! - Expose the only sanctioned mutation operations, each followed by a
//!   write-through save of the whole collection.
//!
//! # Invariants
//! - Mutations that change nothing perform no persistence write.
//! - The in-memory collection stays authoritative even when a write fails.

pub mod task_session;
