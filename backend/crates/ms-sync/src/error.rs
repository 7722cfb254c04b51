use ms_db::DbError;
use ms_moodle::MoodleError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Local user {local_user_id} has no linked Moodle user {location}")]
    MissingMapping {
        local_user_id: i64,
        location: ErrorLocation,
    },

    #[error("Local resource error: {message}: {source} {location}")]
    LocalResource {
        message: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Access denied: {message} {location}")]
    AccessDenied {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unsupported action: {action} {location}")]
    UnsupportedAction {
        action: String,
        location: ErrorLocation,
    },

    #[error("Moodle request failed: {source} {location}")]
    Remote {
        #[source]
        source: MoodleError,
        location: ErrorLocation,
    },

    #[error("Mapping store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl SyncError {
    #[track_caller]
    pub fn missing_mapping(local_user_id: i64) -> Self {
        Self::MissingMapping {
            local_user_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn local_resource<S: Into<String>>(message: S, source: std::io::Error) -> Self {
        Self::LocalResource {
            message: message.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn access_denied<S: Into<String>>(message: S) -> Self {
        Self::AccessDenied {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unsupported_action<S: Into<String>>(action: S) -> Self {
        Self::UnsupportedAction {
            action: action.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MoodleError> for SyncError {
    #[track_caller]
    fn from(source: MoodleError) -> Self {
        Self::Remote {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for SyncError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        Self::store(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
