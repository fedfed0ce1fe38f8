//! REST routing for the task service.
//!
//! Endpoints:
//!   POST   /tasks/
//!   GET    /tasks/
//!   GET    /tasks/{id}
//!   PUT    /tasks/{id}
//!   DELETE /tasks/{id}
//!   GET    /health

pub mod health;
pub mod tasks;

use crate::state::AppContext;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Builds the service router with all routes bound to shared state.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/tasks/", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .with_state(ctx)
}
