#![allow(dead_code)]

//! Test infrastructure for ms-server API tests

use ms_config::Config;
use ms_server::{AppState, build_router, build_state};

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const WS_TOKEN: &str = "ws-token-123";

/// AppState backed by an in-memory database and a Moodle at `moodle_url`.
pub async fn create_test_state(moodle_url: &str) -> AppState {
    create_test_state_with(moodle_url, |_| {}).await
}

pub async fn create_test_state_with(moodle_url: &str, configure: impl FnOnce(&mut Config)) -> AppState {
    let mut config = Config::default();
    config.moodle.url = moodle_url.to_string();
    config.moodle.token = WS_TOKEN.to_string();
    configure(&mut config);

    let pool = ms_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    build_state(&config, pool).expect("Failed to build app state")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn send(state: &AppState, request: Request<Body>) -> TestResponse {
    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Post `{"event": event, "payload": payload}` to the event endpoint.
pub async fn post_event(state: &AppState, event: &str, payload: Value) -> TestResponse {
    let body = serde_json::json!({ "event": event, "payload": payload });
    send(state, post_json("/api/v1/events", &body)).await
}

/// Insert a row into the host session mirror.
pub async fn insert_host_session(
    pool: &SqlitePool,
    session_id: &str,
    username: &str,
    client_id: i64,
    guest: bool,
    time: i64,
) {
    sqlx::query(
        "INSERT INTO host_sessions (session_id, username, client_id, guest, time) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(session_id)
    .bind(username)
    .bind(client_id)
    .bind(guest)
    .bind(time)
    .execute(pool)
    .await
    .expect("Failed to insert host session");
}
