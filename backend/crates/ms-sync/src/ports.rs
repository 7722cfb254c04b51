//! Collaborators the event handlers depend on.
//!
//! Production implementations live in [`crate::adapters`]; tests supply
//! in-memory ones.

use crate::SyncResult;

use ms_core::{IdentityPair, RemoteFunction};
use ms_moodle::{Method, MoodleResult, RawResponse};

use async_trait::async_trait;
use serde_json::Value;

/// Remote LMS API.
#[async_trait]
pub trait MoodleApi: Send + Sync {
    /// Call a web-service function with a JSON-object parameter set.
    async fn request(&self, function: RemoteFunction, params: &Value) -> MoodleResult<Value>;

    /// Call a custom site endpoint and return the raw reply.
    async fn custom_request(
        &self,
        path: &str,
        form: &[(&str, &str)],
        method: Method,
    ) -> MoodleResult<RawResponse>;

    /// URL and token are both present.
    fn is_configured(&self) -> bool;

    /// Secret the LMS presents when it calls back into this service.
    fn shared_token(&self) -> &str;
}

/// Local id to remote id mapping store.
#[async_trait]
pub trait IdentityMap: Send + Sync {
    /// Store a pair, replacing any pair for the same local id.
    async fn add(&self, pair: IdentityPair) -> SyncResult<()>;

    /// Remove the pairs of the given local ids, returning how many were removed.
    async fn remove(&self, local_user_ids: &[i64]) -> SyncResult<u64>;

    async fn lookup(&self, local_user_id: i64) -> SyncResult<Option<i64>>;
}

/// Host CMS session store.
#[async_trait]
pub trait SessionLookup: Send + Sync {
    /// A logged-in frontend session for `username` was active after
    /// `not_before` (unix seconds).
    async fn has_active_frontend_session(&self, username: &str, not_before: i64)
    -> SyncResult<bool>;
}
