//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message"}}` with a
//! matching status code.

use ms_core::CoreError;
use ms_sync::SyncError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "FORBIDDEN", "BAD_REQUEST")
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or wrong ingress token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Callback token mismatch (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let (code, message) = match self {
            ApiError::Unauthorized { message, .. } => ("UNAUTHORIZED", message),
            ApiError::Forbidden { message, .. } => ("FORBIDDEN", message),
            ApiError::BadRequest { message, .. } => ("BAD_REQUEST", message),
            ApiError::Internal { message, .. } => ("INTERNAL_ERROR", message),
        };

        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code: code.into(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Event names and payloads the host sent that cannot be decoded
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let message = match &e {
            CoreError::InvalidEventKind { value, .. } => format!("Unknown event '{}'", value),
            CoreError::InvalidPayload { kind, source, .. } => {
                format!("Invalid {} payload: {}", kind, source)
            }
        };
        ApiError::bad_request(message)
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::bad_request(e.body_text())
    }
}

impl From<SyncError> for ApiError {
    #[track_caller]
    fn from(e: SyncError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            SyncError::AccessDenied { message, .. } => ApiError::Forbidden { message, location },
            SyncError::UnsupportedAction { action, .. } => ApiError::BadRequest {
                message: format!("Unsupported action '{}'", action),
                location,
            },
            other => {
                // Store and remote details stay in the log
                log::error!("Sync error: {}", other);
                ApiError::Internal {
                    message: "Synchronization failed".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
