use crate::{ApiResult, AppState};

use ms_sync::{SessionCheckRequest, SessionCheckResponse, check_session};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// POST /api/v1/callback
///
/// Moodle asks whether a host user still has a live frontend session.
pub async fn session_callback(
    State(state): State<AppState>,
    request: Result<Json<SessionCheckRequest>, JsonRejection>,
) -> ApiResult<Json<SessionCheckResponse>> {
    let Json(request) = request?;

    let response = check_session(state.context(), &request).await?;

    Ok(Json(response))
}
