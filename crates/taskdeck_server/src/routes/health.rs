//! Liveness probe route.

use axum::Json;
use serde_json::{json, Value};
use taskdeck_core::{core_version, ping};

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": ping(),
        "version": core_version(),
    }))
}
