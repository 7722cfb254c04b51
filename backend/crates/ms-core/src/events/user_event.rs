use crate::{CoreError, CoreResult, EventKind, LocalUser};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeforeSaveEvent {
    #[serde(default)]
    pub old_user: Option<LocalUser>,
    #[serde(default)]
    pub is_new: bool,
    pub data: LocalUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AfterSaveEvent {
    pub user: LocalUser,
    pub is_new: bool,
    /// Whether the host managed to store the user.
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AfterDeleteEvent {
    pub user: LocalUser,
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AfterLoginEvent {
    pub username: String,
    /// Host login options (remember, response type, ...), passed through untouched.
    #[serde(default)]
    pub options: Value,
}

/// A typed host event.
///
/// Events whose handlers ignore their arguments keep the raw payload.
#[derive(Debug, Clone)]
pub enum UserEvent {
    BeforeSave(BeforeSaveEvent),
    AfterSave(AfterSaveEvent),
    AfterDelete(AfterDeleteEvent),
    AfterLogin(AfterLoginEvent),
    LoginFailure(Value),
    Logout(Value),
    AfterResetRequest(Value),
    AfterResetComplete(Value),
}

impl UserEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::BeforeSave(_) => EventKind::UserBeforeSave,
            Self::AfterSave(_) => EventKind::UserAfterSave,
            Self::AfterDelete(_) => EventKind::UserAfterDelete,
            Self::AfterLogin(_) => EventKind::UserAfterLogin,
            Self::LoginFailure(_) => EventKind::UserLoginFailure,
            Self::Logout(_) => EventKind::UserLogout,
            Self::AfterResetRequest(_) => EventKind::UserAfterResetRequest,
            Self::AfterResetComplete(_) => EventKind::UserAfterResetComplete,
        }
    }

    /// Decode a host payload for the given event kind.
    #[track_caller]
    pub fn from_json(kind: EventKind, payload: Value) -> CoreResult<Self> {
        let event = match kind {
            EventKind::UserBeforeSave => Self::BeforeSave(decode(kind, payload)?),
            EventKind::UserAfterSave => Self::AfterSave(decode(kind, payload)?),
            EventKind::UserAfterDelete => Self::AfterDelete(decode(kind, payload)?),
            EventKind::UserAfterLogin => Self::AfterLogin(decode(kind, payload)?),
            EventKind::UserLoginFailure => Self::LoginFailure(payload),
            EventKind::UserLogout => Self::Logout(payload),
            EventKind::UserAfterResetRequest => Self::AfterResetRequest(payload),
            EventKind::UserAfterResetComplete => Self::AfterResetComplete(payload),
        };
        Ok(event)
    }
}

#[track_caller]
fn decode<T: DeserializeOwned>(kind: EventKind, payload: Value) -> CoreResult<T> {
    let location = ErrorLocation::from(Location::caller());
    serde_json::from_value(payload).map_err(|source| CoreError::InvalidPayload {
        kind: kind.as_str(),
        source,
        location,
    })
}
