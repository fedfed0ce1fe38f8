use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use taskdeck_core::db::open_db_in_memory;
use taskdeck_core::Task;
use taskdeck_server::{build_router, AppContext};
use tower::ServiceExt;

fn test_app() -> Router {
    let conn = open_db_in_memory().unwrap();
    build_router(Arc::new(AppContext::new(conn)))
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_returns_task_with_assigned_id() {
    let app = test_app();

    let response = app
        .oneshot(request("POST", "/tasks/?title=Buy%20milk&description=2L"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let task: Task = json_body(response.into_body()).await;
    assert_eq!(task.id, 1);
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, "2L");
}

#[tokio::test]
async fn create_without_required_params_is_rejected() {
    let app = test_app();

    let response = app.oneshot(request("POST", "/tasks/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_starts_empty() {
    let app = test_app();

    let response = app.oneshot(request("GET", "/tasks/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let tasks: Vec<Task> = json_body(response.into_body()).await;
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn get_missing_task_returns_404_with_detail() {
    let app = test_app();

    let response = app.oneshot(request("GET", "/tasks/42")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Tarefa não encontrada");
}

#[tokio::test]
async fn update_missing_task_returns_404() {
    let app = test_app();

    let response = app
        .oneshot(request("PUT", "/tasks/7?title=ghost&description=none"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_id() {
    let app = test_app();

    let created: Task = json_body(
        app.clone()
            .oneshot(request("POST", "/tasks/?title=draft&description=old"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/tasks/{}?title=A&description=B", created.id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: Task = json_body(
        app.oneshot(request("GET", &format!("/tasks/{}", created.id)))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "A");
    assert_eq!(fetched.description, "B");
}

#[tokio::test]
async fn delete_confirms_then_reports_404_on_second_attempt() {
    let app = test_app();

    let created: Task = json_body(
        app.clone()
            .oneshot(request("POST", "/tasks/?title=once&description=only"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/tasks/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Tarefa excluída com sucesso");

    let second = app
        .oneshot(request("DELETE", &format!("/tasks/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_delete_get_list_scenario() {
    let app = test_app();

    let milk: Task = json_body(
        app.clone()
            .oneshot(request("POST", "/tasks/?title=Buy%20milk&description=2L"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(milk.id, 1);

    let dog: Task = json_body(
        app.clone()
            .oneshot(request("POST", "/tasks/?title=Walk%20dog&description="))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(dog.id, 2);
    assert_eq!(dog.description, "");

    let deleted = app
        .clone()
        .oneshot(request("DELETE", "/tasks/1"))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let missing = app.clone().oneshot(request("GET", "/tasks/1")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let remaining: Vec<Task> = json_body(
        app.oneshot(request("GET", "/tasks/"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(remaining, vec![dog]);
}

#[tokio::test]
async fn health_reports_status_and_version() {
    let app = test_app();

    let response = app.oneshot(request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status"], "pong");
    assert!(body["version"].as_str().is_some_and(|v| !v.is_empty()));
}
