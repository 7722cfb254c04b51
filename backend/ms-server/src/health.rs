use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;
use sqlx::SqlitePool;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let (status, database) = if ping(&state.pool).await {
        ("healthy", "operational")
    } else {
        ("degraded", "unavailable")
    };
    let moodle = if state.context().moodle.is_configured() {
        "configured"
    } else {
        "not_configured"
    };
    let sso = if state.context().sso.enabled {
        "enabled"
    } else {
        "disabled"
    };

    let health = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "moodle": moodle,
            "sso": sso,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness check (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness check: the mapping store must answer
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if ping(&state.pool).await {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
    }
}

async fn ping(pool: &SqlitePool) -> bool {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Database ping failed: {}", e);
            false
        }
    }
}
