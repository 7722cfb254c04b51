//! Port implementations backed by the SQLite repositories and the reqwest
//! Moodle client.

use crate::{IdentityMap, MoodleApi, SessionLookup, SyncResult};

use ms_core::{IdentityPair, RemoteFunction};
use ms_db::{IdentityMapRepository, SessionRepository};
use ms_moodle::{Method, MoodleClient, MoodleResult, RawResponse};

use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
impl MoodleApi for MoodleClient {
    async fn request(&self, function: RemoteFunction, params: &Value) -> MoodleResult<Value> {
        MoodleClient::request(self, function, params).await
    }

    async fn custom_request(
        &self,
        path: &str,
        form: &[(&str, &str)],
        method: Method,
    ) -> MoodleResult<RawResponse> {
        MoodleClient::custom_request(self, path, form, method).await
    }

    fn is_configured(&self) -> bool {
        MoodleClient::is_configured(self)
    }

    fn shared_token(&self) -> &str {
        self.token()
    }
}

#[async_trait]
impl IdentityMap for IdentityMapRepository {
    async fn add(&self, pair: IdentityPair) -> SyncResult<()> {
        Ok(IdentityMapRepository::add(self, pair).await?)
    }

    async fn remove(&self, local_user_ids: &[i64]) -> SyncResult<u64> {
        Ok(IdentityMapRepository::remove(self, local_user_ids).await?)
    }

    async fn lookup(&self, local_user_id: i64) -> SyncResult<Option<i64>> {
        Ok(IdentityMapRepository::lookup(self, local_user_id).await?)
    }
}

#[async_trait]
impl SessionLookup for SessionRepository {
    async fn has_active_frontend_session(
        &self,
        username: &str,
        not_before: i64,
    ) -> SyncResult<bool> {
        Ok(SessionRepository::has_active_frontend_session(self, username, not_before).await?)
    }
}
