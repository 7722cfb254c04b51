use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid event kind: {value} {location}")]
    InvalidEventKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid {kind} payload: {source} {location}")]
    InvalidPayload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
