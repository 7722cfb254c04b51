//! Axum extractor guarding the host-facing event endpoint

use crate::{ApiError, AppState};

use ms_core::tokens_match;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use http::header::AUTHORIZATION;

const BEARER_PREFIX: &str = "Bearer ";

/// Proof that the request carried the configured ingress token.
///
/// When no token is configured every request passes.
pub struct IngressAuth;

impl FromRequestParts<AppState> for IngressAuth {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(expected) = state.ingress_token.as_deref() else {
                return Ok(IngressAuth);
            };

            let presented = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix(BEARER_PREFIX));

            match presented {
                Some(token) if tokens_match(token, expected) => Ok(IngressAuth),
                Some(_) => Err(ApiError::unauthorized("Invalid bearer token")),
                None => Err(ApiError::unauthorized("Missing bearer token")),
            }
        }
    }
}
