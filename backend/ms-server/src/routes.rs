use crate::api::{callback, capabilities, events};
use crate::{AppState, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Host and Moodle facing endpoints
        .route("/api/v1/events", post(events::handle_event))
        .route("/api/v1/callback", post(callback::session_callback))
        .route("/api/v1/capabilities", get(capabilities::capabilities_json))
        // Admin diagnostic
        .route("/admin/capabilities", get(capabilities::capabilities_html))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
