use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur talking to Moodle
#[derive(Error, Debug)]
pub enum MoodleError {
    #[error("Moodle client is not configured (missing url or token) {location}")]
    NotConfigured { location: ErrorLocation },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Moodle error: {message} (code: {code}) {location}")]
    Remote {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected Moodle response: {message} {location}")]
    UnexpectedResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl MoodleError {
    #[track_caller]
    pub fn not_configured() -> Self {
        MoodleError::NotConfigured {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        MoodleError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        MoodleError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn remote<C: Into<String>, M: Into<String>>(code: C, message: M) -> Self {
        MoodleError::Remote {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        MoodleError::UnexpectedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Remote error code, when Moodle reported one
    pub fn remote_code(&self) -> Option<&str> {
        match self {
            MoodleError::Remote { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MoodleError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        MoodleError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for MoodleError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        MoodleError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, MoodleError>;
