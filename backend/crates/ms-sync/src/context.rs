use crate::{IdentityMap, MoodleApi, SessionLookup, SyncError, SyncResult};

use ms_config::{SessionConfig, SsoConfig};

use std::sync::Arc;

/// Collaborators and settings shared by every event handler.
#[derive(Clone)]
pub struct SyncContext {
    pub moodle: Arc<dyn MoodleApi>,
    pub identities: Arc<dyn IdentityMap>,
    pub sessions: Arc<dyn SessionLookup>,
    pub sso: SsoConfig,
    pub session: SessionConfig,
}

impl SyncContext {
    pub fn new(
        moodle: Arc<dyn MoodleApi>,
        identities: Arc<dyn IdentityMap>,
        sessions: Arc<dyn SessionLookup>,
        sso: SsoConfig,
        session: SessionConfig,
    ) -> Self {
        Self {
            moodle,
            identities,
            sessions,
            sso,
            session,
        }
    }

    /// Remote id linked to `local_user_id`, or `MissingMapping`.
    pub async fn remote_id_for(&self, local_user_id: i64) -> SyncResult<i64> {
        self.identities
            .lookup(local_user_id)
            .await?
            .ok_or_else(|| SyncError::missing_mapping(local_user_id))
    }
}
