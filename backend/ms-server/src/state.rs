use crate::error::Result as ServerErrorResult;

use ms_config::Config;
use ms_db::{IdentityMapRepository, SessionRepository};
use ms_moodle::MoodleClient;
use ms_sync::{Dispatcher, SyncContext};

use std::sync::Arc;

use log::{info, warn};
use sqlx::SqlitePool;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub pool: SqlitePool,
    /// Bearer token required on the event endpoint, if any.
    pub ingress_token: Option<String>,
}

impl AppState {
    pub fn context(&self) -> &SyncContext {
        self.dispatcher.context()
    }
}

/// Wire the Moodle client, the repositories and the default event handlers.
pub fn build_state(config: &Config, pool: SqlitePool) -> ServerErrorResult<AppState> {
    let moodle = MoodleClient::from_config(&config.moodle, &config.sso)?;
    if moodle.is_configured() {
        info!("Moodle client ready for {}", moodle.base_url);
    } else {
        warn!("Moodle URL or token not set, user changes will not be synchronized");
    }

    let ctx = SyncContext::new(
        Arc::new(moodle),
        Arc::new(IdentityMapRepository::new(pool.clone())),
        Arc::new(SessionRepository::new(pool.clone())),
        config.sso.clone(),
        config.session.clone(),
    );

    if config.ingress.token.is_none() {
        warn!("Event endpoint is open: ingress.token is not set");
    }

    Ok(AppState {
        dispatcher: Arc::new(Dispatcher::with_default_handlers(ctx)),
        pool,
        ingress_token: config.ingress.token.clone(),
    })
}
