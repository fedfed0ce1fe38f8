//! Repository layer abstraction and persistence implementation.
//!
//! # Responsibility
//! - Define the durable record store contract for tasks.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Absence of a record is a normal outcome (`Option`/`bool`), not an
//!   error; repository errors are infrastructure faults only.

pub mod task_repo;
