use crate::SyncContext;
use crate::handlers::{
    AfterDeleteHandler, AfterLoginHandler, AfterSaveHandler, BeforeSaveHandler, EventHandler,
    NoopHandler,
};

use ms_core::{EventKind, EventOutcome, UserEvent};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

/// Routes each host event to the handler registered for its kind.
pub struct Dispatcher {
    ctx: SyncContext,
    handlers: HashMap<EventKind, Arc<dyn EventHandler>>,
}

impl Dispatcher {
    /// A dispatcher with no handlers registered.
    pub fn new(ctx: SyncContext) -> Self {
        Self {
            ctx,
            handlers: HashMap::new(),
        }
    }

    /// A dispatcher with the standard handler for every event kind.
    pub fn with_default_handlers(ctx: SyncContext) -> Self {
        let noop: Arc<dyn EventHandler> = Arc::new(NoopHandler);

        let mut dispatcher = Self::new(ctx);
        dispatcher.register(EventKind::UserBeforeSave, Arc::new(BeforeSaveHandler));
        dispatcher.register(EventKind::UserAfterSave, Arc::new(AfterSaveHandler));
        dispatcher.register(EventKind::UserAfterDelete, Arc::new(AfterDeleteHandler));
        dispatcher.register(EventKind::UserAfterLogin, Arc::new(AfterLoginHandler));
        dispatcher.register(EventKind::UserLoginFailure, noop.clone());
        dispatcher.register(EventKind::UserLogout, noop.clone());
        dispatcher.register(EventKind::UserAfterResetRequest, noop.clone());
        dispatcher.register(EventKind::UserAfterResetComplete, noop);
        dispatcher
    }

    /// Register `handler` for `kind`, returning the handler it replaced.
    pub fn register(
        &mut self,
        kind: EventKind,
        handler: Arc<dyn EventHandler>,
    ) -> Option<Arc<dyn EventHandler>> {
        self.handlers.insert(kind, handler)
    }

    pub fn is_registered(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn context(&self) -> &SyncContext {
        &self.ctx
    }

    /// Handle one event to completion.
    ///
    /// Events without a registered handler are accepted unchanged.
    pub async fn dispatch(&self, event: UserEvent) -> EventOutcome {
        let kind = event.kind();
        let started = Instant::now();

        info!("-> {}", kind);

        let outcome = match self.handlers.get(&kind) {
            Some(handler) => handler.handle(&self.ctx, event).await,
            None => {
                debug!("No handler registered for {}", kind);
                EventOutcome::new()
            }
        };

        info!(
            "<- {} completed in {}ms ({} message(s), {} cookie(s))",
            kind,
            started.elapsed().as_millis(),
            outcome.messages.len(),
            outcome.cookies.len()
        );

        outcome
    }
}
