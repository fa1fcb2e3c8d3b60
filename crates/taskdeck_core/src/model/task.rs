//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted to the slot store.
//! - Provide lifecycle helpers for the completed flag.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at` is assigned exactly once at construction and never mutated.
//! - Title emptiness is enforced at the session boundary, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task in a collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// A single to-do record.
///
/// Serialized with camelCase field names to match the slot wire format,
/// with `created_at` encoded as an ISO-8601 string. The wire shape is the
/// durable contract; the in-memory shape uses native date and id types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID assigned at creation.
    pub id: TaskId,
    /// Short label, non-empty after trimming for any task in a collection.
    pub title: String,
    /// Free-form details, may be empty.
    pub description: String,
    /// Optional target calendar date, kept as an unparsed `YYYY-MM-DD`
    /// string or empty. Not validated beyond optionality.
    pub target_date: String,
    /// Completion flag, `false` for freshly created tasks.
    pub completed: bool,
    /// Creation instant, serialized as ISO-8601 text on the wire.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a generated id and the current timestamp.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - The title is stored as given; callers validate emptiness first.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        target_date: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), Utc::now(), title, description, target_date)
    }

    /// Creates a task with caller-provided identity and creation instant.
    ///
    /// Used by import and test paths where identity already exists
    /// externally.
    pub fn with_id(
        id: TaskId,
        created_at: DateTime<Utc>,
        title: impl Into<String>,
        description: impl Into<String>,
        target_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            target_date: target_date.into(),
            completed: false,
            created_at,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Returns whether this task still needs doing.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
