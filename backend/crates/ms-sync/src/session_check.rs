//! Callback from Moodle asking whether a user is logged into the host.

use crate::{SyncContext, SyncError, SyncResult};

use ms_core::tokens_match;

use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// The only callback action Moodle sends.
pub const CHECK_SESSION_ACTION: &str = "check_joomla_user_session";

const SECONDS_PER_MINUTE: i64 = 60;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionCheckRequest {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionCheckResponse {
    pub username: String,
    pub logged_in: bool,
}

pub async fn check_session(
    ctx: &SyncContext,
    request: &SessionCheckRequest,
) -> SyncResult<SessionCheckResponse> {
    check_session_at(ctx, request, Utc::now().timestamp()).await
}

/// Evaluate the callback as of `now` (unix seconds).
///
/// The token is checked before anything else; an unset shared token rejects
/// every request.
pub async fn check_session_at(
    ctx: &SyncContext,
    request: &SessionCheckRequest,
    now: i64,
) -> SyncResult<SessionCheckResponse> {
    let expected = ctx.moodle.shared_token();
    if expected.is_empty() || !tokens_match(&request.token, expected) {
        warn!(
            "Rejected callback with an invalid token (action: '{}')",
            request.action
        );
        return Err(SyncError::access_denied("Wrong token"));
    }

    if request.action != CHECK_SESSION_ACTION {
        return Err(SyncError::unsupported_action(request.action.clone()));
    }

    let not_before = now - ctx.session.lifetime_minutes as i64 * SECONDS_PER_MINUTE;

    let logged_in = ctx
        .sessions
        .has_active_frontend_session(&request.username, not_before)
        .await?;

    debug!(
        "Session check for '{}': logged_in={}",
        request.username, logged_in
    );

    Ok(SessionCheckResponse {
        username: request.username.clone(),
        logged_in,
    })
}
