//! One handler per host event kind.
//!
//! Handlers never fail the host request: remote and storage failures are
//! logged and reported back as user-visible messages on the outcome.

pub mod after_delete;
pub mod after_login;
pub mod after_save;
pub mod before_save;
pub mod noop;

pub use after_delete::{AfterDeleteHandler, handle_after_delete};
pub use after_login::{AfterLoginHandler, handle_after_login};
pub use after_save::{AfterSaveHandler, handle_after_save};
pub use before_save::{BeforeSaveHandler, handle_before_save};
pub use noop::NoopHandler;

use crate::SyncContext;

use ms_core::{EventKind, EventOutcome, UserEvent};

use async_trait::async_trait;
use log::warn;

#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, ctx: &SyncContext, event: UserEvent) -> EventOutcome;
}

/// Outcome for an event routed to a handler registered for another kind.
pub(crate) fn mismatched_event(expected: EventKind, event: &UserEvent) -> EventOutcome {
    warn!(
        "Handler for {} received a {} event; ignoring",
        expected,
        event.kind()
    );
    EventOutcome::new()
}
