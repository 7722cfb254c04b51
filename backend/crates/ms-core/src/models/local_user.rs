use std::fmt;

use serde::{Deserialize, Serialize};

/// A user record as the host reports it.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalUser {
    #[serde(default)]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Cleartext password, only present when the user just set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_clear: Option<String>,
}

impl LocalUser {
    /// Remote usernames are always lowercase.
    pub fn normalized_username(&self) -> String {
        self.username.to_lowercase()
    }

    /// The cleartext password, if a non-empty one was supplied.
    pub fn new_password(&self) -> Option<&str> {
        self.password_clear.as_deref().filter(|p| !p.is_empty())
    }
}

impl fmt::Debug for LocalUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalUser")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("name", &self.name)
            .field("email", &self.email)
            .field(
                "password_clear",
                &self.password_clear.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
