use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::Serialize;

/// Host user lifecycle events this service subscribes to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    UserBeforeSave,
    UserAfterSave,
    UserAfterDelete,
    UserAfterLogin,
    UserLoginFailure,
    UserLogout,
    UserAfterResetRequest,
    UserAfterResetComplete,
}

impl EventKind {
    pub const ALL: [EventKind; 8] = [
        Self::UserBeforeSave,
        Self::UserAfterSave,
        Self::UserAfterDelete,
        Self::UserAfterLogin,
        Self::UserLoginFailure,
        Self::UserLogout,
        Self::UserAfterResetRequest,
        Self::UserAfterResetComplete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserBeforeSave => "user_before_save",
            Self::UserAfterSave => "user_after_save",
            Self::UserAfterDelete => "user_after_delete",
            Self::UserAfterLogin => "user_after_login",
            Self::UserLoginFailure => "user_login_failure",
            Self::UserLogout => "user_logout",
            Self::UserAfterResetRequest => "user_after_reset_request",
            Self::UserAfterResetComplete => "user_after_reset_complete",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::InvalidEventKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
