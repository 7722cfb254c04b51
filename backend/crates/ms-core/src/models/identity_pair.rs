use serde::{Deserialize, Serialize};

/// Link between a local user and its remote LMS counterpart.
///
/// A local id maps to at most one remote id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityPair {
    pub local_user_id: i64,
    pub remote_user_id: i64,
}

impl IdentityPair {
    pub fn new(local_user_id: i64, remote_user_id: i64) -> Self {
        Self {
            local_user_id,
            remote_user_id,
        }
    }
}
