use ms_core::{IdentityPair, RemoteFunction};
use ms_moodle::{Method, MoodleError, MoodleResult, RawResponse};
use ms_sync::{IdentityMap, MoodleApi, SessionLookup, SyncError, SyncResult};

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

/// Scripted answer for one remote call
#[derive(Debug, Clone)]
pub enum Reply {
    Value(Value),
    Remote { code: String, message: String },
    Unreachable,
}

impl Reply {
    pub fn remote(code: &str, message: &str) -> Self {
        Reply::Remote {
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    fn into_result(self) -> MoodleResult<Value> {
        match self {
            Reply::Value(value) => Ok(value),
            Reply::Remote { code, message } => Err(MoodleError::remote(code, message)),
            Reply::Unreachable => Err(MoodleError::unexpected("connection refused")),
        }
    }
}

/// Records every call; answers from per-function queues (null when empty)
pub struct FakeMoodle {
    token: String,
    configured: Mutex<bool>,
    replies: Mutex<HashMap<RemoteFunction, VecDeque<Reply>>>,
    calls: Mutex<Vec<(RemoteFunction, Value)>>,
    custom_reply: Mutex<Option<RawResponse>>,
    custom_calls: Mutex<Vec<(String, Vec<(String, String)>, Method)>>,
}

impl FakeMoodle {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            configured: Mutex::new(true),
            replies: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            custom_reply: Mutex::new(None),
            custom_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_configured(&self, configured: bool) {
        *self.configured.lock().unwrap() = configured;
    }

    pub fn reply(&self, function: RemoteFunction, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .entry(function)
            .or_default()
            .push_back(reply);
    }

    pub fn reply_custom(&self, response: RawResponse) {
        *self.custom_reply.lock().unwrap() = Some(response);
    }

    pub fn calls(&self) -> Vec<(RemoteFunction, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, function: RemoteFunction) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter(|(called, _)| *called == function)
            .map(|(_, params)| params)
            .collect()
    }

    pub fn custom_calls(&self) -> Vec<(String, Vec<(String, String)>, Method)> {
        self.custom_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MoodleApi for FakeMoodle {
    async fn request(&self, function: RemoteFunction, params: &Value) -> MoodleResult<Value> {
        self.calls.lock().unwrap().push((function, params.clone()));

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get_mut(&function)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Reply::Value(Value::Null));

        reply.into_result()
    }

    async fn custom_request(
        &self,
        path: &str,
        form: &[(&str, &str)],
        method: Method,
    ) -> MoodleResult<RawResponse> {
        self.custom_calls.lock().unwrap().push((
            path.to_string(),
            form.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            method,
        ));

        match self.custom_reply.lock().unwrap().clone() {
            Some(response) => Ok(response),
            None => Err(MoodleError::unexpected("connection refused")),
        }
    }

    fn is_configured(&self) -> bool {
        *self.configured.lock().unwrap()
    }

    fn shared_token(&self) -> &str {
        &self.token
    }
}

/// In-memory mapping store
#[derive(Default)]
pub struct FakeIdentityMap {
    pairs: Mutex<HashMap<i64, i64>>,
    failing: Mutex<bool>,
}

impl FakeIdentityMap {
    pub fn seed(&self, local_user_id: i64, remote_user_id: i64) {
        self.pairs
            .lock()
            .unwrap()
            .insert(local_user_id, remote_user_id);
    }

    pub fn fail_all(&self) {
        *self.failing.lock().unwrap() = true;
    }

    pub fn snapshot(&self) -> HashMap<i64, i64> {
        self.pairs.lock().unwrap().clone()
    }

    fn check(&self) -> SyncResult<()> {
        if *self.failing.lock().unwrap() {
            return Err(SyncError::store("database is locked"));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityMap for FakeIdentityMap {
    async fn add(&self, pair: IdentityPair) -> SyncResult<()> {
        self.check()?;
        self.pairs
            .lock()
            .unwrap()
            .insert(pair.local_user_id, pair.remote_user_id);
        Ok(())
    }

    async fn remove(&self, local_user_ids: &[i64]) -> SyncResult<u64> {
        self.check()?;
        let mut pairs = self.pairs.lock().unwrap();
        let removed = local_user_ids
            .iter()
            .filter(|id| pairs.remove(*id).is_some())
            .count();
        Ok(removed as u64)
    }

    async fn lookup(&self, local_user_id: i64) -> SyncResult<Option<i64>> {
        self.check()?;
        Ok(self.pairs.lock().unwrap().get(&local_user_id).copied())
    }
}

/// Frontend sessions as (username, last activity)
#[derive(Default)]
pub struct FakeSessions {
    sessions: Mutex<Vec<(String, i64)>>,
    queries: Mutex<Vec<(String, i64)>>,
}

impl FakeSessions {
    pub fn add(&self, username: &str, time: i64) {
        self.sessions
            .lock()
            .unwrap()
            .push((username.to_string(), time));
    }

    pub fn queries(&self) -> Vec<(String, i64)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionLookup for FakeSessions {
    async fn has_active_frontend_session(
        &self,
        username: &str,
        not_before: i64,
    ) -> SyncResult<bool> {
        self.queries
            .lock()
            .unwrap()
            .push((username.to_string(), not_before));

        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .any(|(name, time)| name == username && *time > not_before))
    }
}
