use crate::SyncContext;
use crate::handlers::EventHandler;

use ms_core::{EventOutcome, UserEvent};

use async_trait::async_trait;
use log::debug;

/// Accepts an event without side effects.
pub struct NoopHandler;

#[async_trait]
impl EventHandler for NoopHandler {
    async fn handle(&self, _ctx: &SyncContext, event: UserEvent) -> EventOutcome {
        debug!("{} needs no Moodle action", event.kind());
        EventOutcome::new()
    }
}
