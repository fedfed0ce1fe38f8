//! Shared request state for the HTTP server.
//!
//! # Responsibility
//! - Own the process-wide SQLite connection behind a mutex.
//!
//! # Invariants
//! - The connection is created once at startup and dropped at shutdown;
//!   there are no hidden connection globals.
//! - Handlers hold the lock for exactly one logical store operation and
//!   never across an await point.

use rusqlite::Connection;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-wide context shared across request handlers.
pub struct AppContext {
    db: Mutex<Connection>,
}

impl AppContext {
    /// Wraps an opened, migrated connection for handler access.
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Mutex::new(conn),
        }
    }

    /// Acquires the store handle for a single logical operation.
    ///
    /// A poisoned lock is recovered rather than propagated: SQLite keeps
    /// per-statement atomicity, so a panicking holder cannot leave the
    /// connection in a torn state.
    pub fn db(&self) -> MutexGuard<'_, Connection> {
        self.db.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
