#![allow(dead_code)]

mod fakes;

pub use fakes::{FakeIdentityMap, FakeMoodle, FakeSessions, Reply};

use ms_config::{SessionConfig, SsoConfig};
use ms_core::LocalUser;
use ms_sync::SyncContext;

use std::sync::Arc;

pub const SHARED_TOKEN: &str = "ws-token-123";

/// Handles onto the fakes behind a context
pub struct Harness {
    pub moodle: Arc<FakeMoodle>,
    pub identities: Arc<FakeIdentityMap>,
    pub sessions: Arc<FakeSessions>,
    pub ctx: SyncContext,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_sso(SsoConfig::default())
    }

    pub fn with_sso(sso: SsoConfig) -> Self {
        let moodle = Arc::new(FakeMoodle::new(SHARED_TOKEN));
        let identities = Arc::new(FakeIdentityMap::default());
        let sessions = Arc::new(FakeSessions::default());

        let ctx = SyncContext::new(
            moodle.clone(),
            identities.clone(),
            sessions.clone(),
            sso,
            SessionConfig::default(),
        );

        Self {
            moodle,
            identities,
            sessions,
            ctx,
        }
    }
}

/// The user from the worked example: local id 42
pub fn alice() -> LocalUser {
    LocalUser {
        id: 42,
        username: "Alice".to_string(),
        name: "Alice A".to_string(),
        email: "a@x.com".to_string(),
        password_clear: Some("p1".to_string()),
    }
}
