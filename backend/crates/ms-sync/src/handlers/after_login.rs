use crate::handlers::{EventHandler, mismatched_event};
use crate::{SyncContext, sso};

use ms_core::{AfterLoginEvent, EventKind, EventOutcome, UserEvent};

use async_trait::async_trait;
use log::{debug, error};

/// Logs the user into Moodle as well and relays the session cookies.
pub struct AfterLoginHandler;

#[async_trait]
impl EventHandler for AfterLoginHandler {
    async fn handle(&self, ctx: &SyncContext, event: UserEvent) -> EventOutcome {
        match event {
            UserEvent::AfterLogin(event) => handle_after_login(ctx, event).await,
            other => mismatched_event(EventKind::UserAfterLogin, &other),
        }
    }
}

pub async fn handle_after_login(ctx: &SyncContext, event: AfterLoginEvent) -> EventOutcome {
    let mut outcome = EventOutcome::new();

    if !ctx.sso.enabled {
        return outcome;
    }

    match sso::relay_login_cookies(ctx, &event.username).await {
        Ok(cookies) => {
            debug!(
                "Relaying {} Moodle cookie(s) for {}",
                cookies.len(),
                event.username
            );
            outcome.cookies = cookies;
        }
        Err(err) => error!("Moodle SSO failed for {}: {}", event.username, err),
    }

    outcome
}
