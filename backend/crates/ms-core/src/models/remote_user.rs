use crate::LocalUser;

use serde::{Deserialize, Serialize};

/// Wrapper for the `users` list parameter of the user functions.
#[derive(Debug, Clone, Serialize)]
pub struct UsersPayload<T> {
    pub users: Vec<T>,
}

impl<T> UsersPayload<T> {
    pub fn single(user: T) -> Self {
        Self { users: vec![user] }
    }
}

/// Parameter of `core_user_delete_users`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteUsersPayload {
    pub userids: Vec<i64>,
}

/// Creation record for `core_user_create_users`.
///
/// The local user carries a single display name; it is sent as both first
/// and last name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewRemoteUser {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl From<&LocalUser> for NewRemoteUser {
    fn from(user: &LocalUser) -> Self {
        Self {
            username: user.normalized_username(),
            password: user.password_clear.clone(),
            firstname: user.name.clone(),
            lastname: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Update record for `core_user_update_users`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RemoteUserUpdate {
    pub id: i64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl RemoteUserUpdate {
    pub fn from_local(remote_user_id: i64, user: &LocalUser) -> Self {
        Self {
            id: remote_user_id,
            username: user.normalized_username(),
            firstname: user.name.clone(),
            lastname: user.name.clone(),
            email: user.email.clone(),
            password: user.new_password().map(String::from),
        }
    }
}

/// One element of the `core_user_create_users` response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreatedRemoteUser {
    pub id: i64,
    #[serde(default)]
    pub username: String,
}
