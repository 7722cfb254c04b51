//! Host event ingress: one typed user event per request.

use crate::{ApiResult, AppState, IngressAuth};

use ms_core::{EventKind, EventOutcome, RelayCookie, UserEvent};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use http::{HeaderValue, header::SET_COOKIE};
use log::warn;
use serde::Deserialize;
use serde_json::Value;

/// `{"event": "user_after_save", "payload": {...}}`
#[derive(Debug, Deserialize)]
pub struct EventEnvelope {
    pub event: String,
    #[serde(default)]
    pub payload: Value,
}

/// POST /api/v1/events
pub async fn handle_event(
    _auth: IngressAuth,
    State(state): State<AppState>,
    envelope: Result<Json<EventEnvelope>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(envelope) = envelope?;

    let kind: EventKind = envelope.event.parse()?;
    let event = UserEvent::from_json(kind, envelope.payload)?;

    let outcome = state.dispatcher.dispatch(event).await;

    Ok(outcome_response(outcome))
}

/// The outcome as JSON, with one `Set-Cookie` header per relay cookie.
pub(crate) fn outcome_response(outcome: EventOutcome) -> Response {
    let headers: Vec<String> = outcome
        .cookies
        .iter()
        .map(RelayCookie::to_set_cookie_header)
        .collect();

    let mut response = Json(outcome).into_response();
    for header in headers {
        match HeaderValue::from_str(&header) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!("Dropping relay cookie that is not a valid header: {}", e),
        }
    }

    response
}
