//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record managed by the task service.
//!
//! # Invariants
//! - `id` is assigned by the store at insert time and never reused for
//!   another task, not even after deletion.
//! - `title` and `description` carry no uniqueness or length constraints.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the record store at insert time.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// Canonical task record: the sole entity of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, immutable for the record's lifetime.
    pub id: TaskId,
    /// Free-form title. Mutable, not unique.
    pub title: String,
    /// Free-form body text. Same constraints as `title`.
    pub description: String,
}

impl Task {
    /// Builds a record from its persisted parts.
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}
