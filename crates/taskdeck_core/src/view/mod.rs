//! Derived read-only views over a task collection.
//!
//! # Responsibility
//! - Project filtered subsets and summary counts from collection state.
//!
//! # Invariants
//! - Projections are pure functions with no side effects; they are
//!   recomputed fresh from current state on every read.

pub mod projection;
