//! Task use-case service.
//!
//! # Responsibility
//! - Expose the four client-facing operations over the record store.
//! - Decide the single domain error (`TaskNotFound`) from store outcomes.
//!
//! # Invariants
//! - The store owns identifier allocation; the service never fabricates ids.
//! - Updates replace `title` and `description` wholesale; there is no
//!   partial-field update.
//! - Storage faults pass through unrecovered as `Repo` errors.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoError, TaskRepository};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, TaskServiceError>;

/// Service error for task use-cases.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Target task does not exist.
    TaskNotFound(TaskId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::TaskNotFound(_) => None,
        }
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper for task CRUD operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one task; the store assigns its id.
    pub fn create_task(&self, title: &str, description: &str) -> ServiceResult<Task> {
        Ok(self.repo.insert(title, description)?)
    }

    /// Lists every live task.
    pub fn list_tasks(&self) -> ServiceResult<Vec<Task>> {
        Ok(self.repo.list_all()?)
    }

    /// Gets one task by id.
    pub fn get_task(&self, id: TaskId) -> ServiceResult<Task> {
        self.repo
            .find(id)?
            .ok_or(TaskServiceError::TaskNotFound(id))
    }

    /// Replaces `title` and `description` of an existing task.
    pub fn update_task(&self, id: TaskId, title: &str, description: &str) -> ServiceResult<Task> {
        self.repo
            .replace(id, title, description)?
            .ok_or(TaskServiceError::TaskNotFound(id))
    }

    /// Deletes one task by id.
    pub fn delete_task(&self, id: TaskId) -> ServiceResult<()> {
        if self.repo.remove(id)? {
            Ok(())
        } else {
            Err(TaskServiceError::TaskNotFound(id))
        }
    }
}
