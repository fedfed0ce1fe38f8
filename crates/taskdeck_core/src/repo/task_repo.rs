//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide durable CRUD primitives over the `tasks` table.
//! - Own identifier allocation: ids are store-assigned and never reused.
//!
//! # Invariants
//! - Every operation is a single SQL statement, atomic per record: a fault
//!   leaves the store in the pre- or post-operation state, never partial.
//! - `find`/`replace`/`remove` report absence through their return value
//!   and perform no write when the record does not exist.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::task::{Task, TaskId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TASK_SELECT_SQL: &str = "SELECT id, title, description FROM tasks";

const REQUIRED_TASK_COLUMNS: &[&str] = &["id", "title", "description"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Infrastructure error for task persistence operations.
///
/// A missing record is not represented here; see the repository contract.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the durable task store.
pub trait TaskRepository {
    /// Persists a new record and returns it with the store-assigned id.
    fn insert(&self, title: &str, description: &str) -> RepoResult<Task>;
    /// Returns every live record, id ascending.
    fn list_all(&self) -> RepoResult<Vec<Task>>;
    /// Returns the record when live, `None` otherwise.
    fn find(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Overwrites both text fields in place; `None` and no write when absent.
    fn replace(&self, id: TaskId, title: &str, description: &str) -> RepoResult<Option<Task>>;
    /// Deletes the record; `false` and no write when absent.
    fn remove(&self, id: TaskId) -> RepoResult<bool>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn insert(&self, title: &str, description: &str) -> RepoResult<Task> {
        self.conn.execute(
            "INSERT INTO tasks (title, description) VALUES (?1, ?2);",
            params![title, description],
        )?;

        Ok(Task::new(self.conn.last_insert_rowid(), title, description))
    }

    fn list_all(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn find(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn replace(&self, id: TaskId, title: &str, description: &str) -> RepoResult<Option<Task>> {
        let changed = self.conn.execute(
            "UPDATE tasks SET title = ?2, description = ?3 WHERE id = ?1;",
            params![id, title, description],
        )?;

        if changed == 0 {
            return Ok(None);
        }

        Ok(Some(Task::new(id, title, description)))
    }

    fn remove(&self, id: TaskId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1;", params![id])?;

        Ok(changed > 0)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'tasks'
        );",
        [],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable("tasks"));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('tasks');")?;
    let mut rows = stmt.query([])?;
    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        columns.push(row.get::<_, String>(0)?);
    }

    for column in REQUIRED_TASK_COLUMNS.iter().copied() {
        if !columns.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: "tasks",
                column,
            });
        }
    }

    Ok(())
}
