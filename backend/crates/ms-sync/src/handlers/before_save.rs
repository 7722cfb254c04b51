use crate::SyncContext;
use crate::handlers::{EventHandler, mismatched_event};

use ms_core::{BeforeSaveEvent, EventKind, EventOutcome, UserEvent};

use async_trait::async_trait;

/// Lowercases the username before the host stores the user.
pub struct BeforeSaveHandler;

#[async_trait]
impl EventHandler for BeforeSaveHandler {
    async fn handle(&self, _ctx: &SyncContext, event: UserEvent) -> EventOutcome {
        match event {
            UserEvent::BeforeSave(event) => handle_before_save(event),
            other => mismatched_event(EventKind::UserBeforeSave, &other),
        }
    }
}

pub fn handle_before_save(event: BeforeSaveEvent) -> EventOutcome {
    let mut data = event.data;
    data.username = data.normalized_username();

    EventOutcome {
        accepted: true,
        data: Some(data),
        ..EventOutcome::new()
    }
}
