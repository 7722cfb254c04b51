use crate::AppState;

use ms_sync::{CapabilityReport, check_capabilities, render_html};

use axum::{Json, extract::State, response::Html};

/// GET /api/v1/capabilities
pub async fn capabilities_json(State(state): State<AppState>) -> Json<CapabilityReport> {
    Json(check_capabilities(state.context().moodle.as_ref()).await)
}

/// GET /admin/capabilities
pub async fn capabilities_html(State(state): State<AppState>) -> Html<String> {
    let report = check_capabilities(state.context().moodle.as_ref()).await;
    Html(render_html(&report))
}
