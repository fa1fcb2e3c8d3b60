//! Task session: canonical collection state plus CRUD entry points.
//!
//! # Responsibility
//! - Load the persisted collection on open, degrading safely on corrupt
//!   slot data.
//! - Apply create/toggle/update/delete and persist the result.
//! - Serve read-only snapshots to the presentation layer.
//!
//! # Invariants
//! - Title emptiness is checked here for `create`; `update` trusts the
//!   caller's edit flow, mirroring the same split in the UI.
//! - Mutations referencing an absent id are benign no-ops and never write.

use crate::model::task::{Task, TaskId};
use crate::store::task_store::{StoreError, TaskStore};
use crate::view::projection::{filter_tasks, summarize, Filter, Summary};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Session error for task mutation operations.
#[derive(Debug)]
pub enum SessionError {
    /// Create was given a title that is empty after trimming.
    EmptyTitle,
    /// Persistence-layer failure. For mutation operations the in-memory
    /// collection already holds the change; only durability is at risk.
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty or whitespace-only"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyTitle => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Owner of the live task collection, generic over the slot store.
pub struct TaskSession<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
}

impl<S: TaskStore> TaskSession<S> {
    /// Opens a session from whatever the slot currently holds.
    ///
    /// An absent slot yields an empty collection. A corrupt slot also
    /// yields an empty collection; the raw failure is logged and the slot
    /// is left untouched until the first real mutation overwrites it.
    /// Medium-level failures propagate.
    pub fn open(store: S) -> SessionResult<Self> {
        let tasks = match store.load() {
            Ok(tasks) => {
                info!(
                    "event=session_open module=session status=ok count={}",
                    tasks.len()
                );
                tasks
            }
            Err(StoreError::Corrupt { slot, details }) => {
                error!(
                    "event=session_open module=session status=recovered error_code=corrupt_slot slot={slot} details={details}"
                );
                Vec::new()
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self { store, tasks })
    }

    /// Creates a task and appends it to the end of the collection.
    ///
    /// Rejects a title that is empty after trimming without touching the
    /// collection or the slot. The title is stored as given, untrimmed.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        target_date: impl Into<String>,
    ) -> SessionResult<Task> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SessionError::EmptyTitle);
        }

        let task = Task::new(title, description, target_date);
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Flips the completion flag of the task matching `id`.
    ///
    /// An absent id is a no-op; stale views racing a delete are expected.
    pub fn toggle_complete(&mut self, id: TaskId) -> SessionResult<()> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_toggle module=session status=skip reason=not_found id={id}");
            return Ok(());
        };

        task.toggle();
        self.persist()
    }

    /// Replaces the task matching `task.id` with the given full record,
    /// preserving its position in the collection.
    ///
    /// Does not re-validate the title; the edit flow owns that check.
    /// An absent id is a no-op.
    pub fn update(&mut self, task: Task) -> SessionResult<()> {
        let Some(position) = self.tasks.iter().position(|existing| existing.id == task.id)
        else {
            debug!(
                "event=task_update module=session status=skip reason=not_found id={}",
                task.id
            );
            return Ok(());
        };

        self.tasks[position] = task;
        self.persist()
    }

    /// Removes the task matching `id` from the collection.
    ///
    /// An absent id is a no-op, which makes delete idempotent.
    pub fn delete(&mut self, id: TaskId) -> SessionResult<()> {
        let Some(position) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("event=task_delete module=session status=skip reason=not_found id={id}");
            return Ok(());
        };

        self.tasks.remove(position);
        self.persist()
    }

    /// Gets one task by id for display, without mutating anything.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Returns the full collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the tasks visible under the given filter mode.
    pub fn filtered(&self, filter: Filter) -> Vec<&Task> {
        filter_tasks(&self.tasks, filter)
    }

    /// Returns current summary counts.
    pub fn summary(&self) -> Summary {
        summarize(&self.tasks)
    }

    fn persist(&self) -> SessionResult<()> {
        self.store.save(&self.tasks)?;
        Ok(())
    }
}
