//! Task store contracts and SQLite slot implementation.
//!
//! # Responsibility
//! - Round-trip the full task collection through one named slot.
//! - Report unreadable slot payloads as recoverable errors.
//!
//! # Invariants
//! - The slot value is a JSON array of tasks with `createdAt` as ISO-8601
//!   text; `load(save(tasks))` reconstructs the input exactly.
//! - Read paths never panic on malformed persisted text.

use crate::db::{migrations, DbError};
use crate::model::task::Task;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default slot key holding the task collection.
const TASKS_SLOT: &str = "tasks";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for slot persistence operations.
#[derive(Debug)]
pub enum StoreError {
    /// Storage medium failure (connection, statement, transaction).
    Db(DbError),
    /// Slot payload exists but cannot be decoded into a task collection.
    /// Recoverable: callers may degrade to an empty collection.
    Corrupt { slot: String, details: String },
    /// Collection could not be serialized for writing.
    Encode(serde_json::Error),
    /// Connection has no applied migrations yet.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Migrated connection lost its `slots` table.
    MissingSlotsTable,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt { slot, details } => {
                write!(f, "slot `{slot}` holds unreadable data: {details}")
            }
            Self::Encode(err) => write!(f, "task collection could not be encoded: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} has no migrations applied (expected {expected_version})"
            ),
            Self::MissingSlotsTable => write!(f, "required table `slots` is missing"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Corrupt { .. } => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingSlotsTable => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Capability interface for the persistence slot.
///
/// `load` returns the previously saved collection, or an empty one when the
/// slot was never written. `save` replaces the slot with the given
/// collection as a whole.
pub trait TaskStore {
    fn load(&self) -> StoreResult<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> StoreResult<()>;
}

/// SQLite-backed task store bound to one named slot.
pub struct SqliteTaskStore<'conn> {
    conn: &'conn Connection,
    slot: String,
}

impl<'conn> SqliteTaskStore<'conn> {
    /// Binds a store to the default task slot.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the connection was never migrated.
    /// - `MissingSlotsTable` when the slot table is absent.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        Self::with_slot(conn, TASKS_SLOT)
    }

    /// Binds a store to a caller-chosen slot key.
    pub fn with_slot(conn: &'conn Connection, slot: impl Into<String>) -> StoreResult<Self> {
        ensure_slot_schema(conn)?;
        Ok(Self {
            conn,
            slot: slot.into(),
        })
    }

    /// Returns the slot key this store reads and writes.
    pub fn slot(&self) -> &str {
        &self.slot
    }
}

impl TaskStore for SqliteTaskStore<'_> {
    fn load(&self) -> StoreResult<Vec<Task>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [self.slot.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&payload).map_err(|err| StoreError::Corrupt {
            slot: self.slot.clone(),
            details: err.to_string(),
        })
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let payload = serde_json::to_string(tasks).map_err(StoreError::Encode)?;

        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.slot.as_str(), payload],
        )?;

        Ok(())
    }
}

fn ensure_slot_schema(conn: &Connection) -> StoreResult<()> {
    let actual_version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    if actual_version == 0 {
        return Err(StoreError::UninitializedConnection {
            expected_version: migrations::latest_version(),
            actual_version,
        });
    }

    let has_table: bool = conn.query_row(
        "SELECT EXISTS (
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'slots'
        );",
        [],
        |row| row.get(0),
    )?;
    if !has_table {
        return Err(StoreError::MissingSlotsTable);
    }

    Ok(())
}
