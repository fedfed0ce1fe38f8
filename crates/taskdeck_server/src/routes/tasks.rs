//! Task CRUD routes.
//!
//! # Responsibility
//! - Translate HTTP requests into task service calls.
//! - Map the single domain error (`TaskNotFound`) to 404 at this boundary.
//!
//! # Invariants
//! - Each handler acquires the store for exactly one service call; the
//!   guard releases on every exit path.
//! - Infrastructure faults answer 500 with the cause logged server-side,
//!   never leaked to the client.

use crate::state::AppContext;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use log::{error, info};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use taskdeck_core::{
    RepoError, SqliteTaskRepository, Task, TaskId, TaskService, TaskServiceError,
};

/// Client-visible text for the single domain failure.
const TASK_NOT_FOUND_DETAIL: &str = "Tarefa não encontrada";
/// Client-visible confirmation for a completed delete.
const TASK_DELETED_MESSAGE: &str = "Tarefa excluída com sucesso";

type ErrorResponse = (StatusCode, Json<Value>);

/// Wire payload for create/update. Both fields are mandatory and replace
/// stored values wholesale.
#[derive(Debug, Deserialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Query(payload): Query<TaskPayload>,
) -> Result<Json<Task>, ErrorResponse> {
    let conn = ctx.db();
    let service = TaskService::new(open_repo(&conn)?);

    let task = service
        .create_task(&payload.title, &payload.description)
        .map_err(service_error)?;

    info!("event=task_create module=server status=ok id={}", task.id);
    Ok(Json(task))
}

pub async fn list_tasks(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Vec<Task>>, ErrorResponse> {
    let conn = ctx.db();
    let service = TaskService::new(open_repo(&conn)?);

    let tasks = service.list_tasks().map_err(service_error)?;
    Ok(Json(tasks))
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, ErrorResponse> {
    let conn = ctx.db();
    let service = TaskService::new(open_repo(&conn)?);

    let task = service.get_task(id).map_err(service_error)?;
    Ok(Json(task))
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<TaskId>,
    Query(payload): Query<TaskPayload>,
) -> Result<Json<Task>, ErrorResponse> {
    let conn = ctx.db();
    let service = TaskService::new(open_repo(&conn)?);

    let task = service
        .update_task(id, &payload.title, &payload.description)
        .map_err(service_error)?;

    info!("event=task_update module=server status=ok id={id}");
    Ok(Json(task))
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<TaskId>,
) -> Result<Json<Value>, ErrorResponse> {
    let conn = ctx.db();
    let service = TaskService::new(open_repo(&conn)?);

    service.delete_task(id).map_err(service_error)?;

    info!("event=task_delete module=server status=ok id={id}");
    Ok(Json(json!({ "message": TASK_DELETED_MESSAGE })))
}

fn open_repo(conn: &rusqlite::Connection) -> Result<SqliteTaskRepository<'_>, ErrorResponse> {
    SqliteTaskRepository::try_new(conn).map_err(|err| {
        error!("event=store_access module=server status=error error={err}");
        internal_error()
    })
}

fn service_error(err: TaskServiceError) -> ErrorResponse {
    match err {
        TaskServiceError::TaskNotFound(id) => {
            info!("event=task_lookup module=server status=miss id={id}");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": TASK_NOT_FOUND_DETAIL })),
            )
        }
        TaskServiceError::Repo(err) => {
            log_repo_fault(&err);
            internal_error()
        }
    }
}

fn log_repo_fault(err: &RepoError) {
    error!("event=task_store module=server status=error error={err}");
}

fn internal_error() -> ErrorResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": "internal server error" })),
    )
}
