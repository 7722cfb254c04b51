pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;


pub use api::{
    callback::session_callback,
    capabilities::{capabilities_html, capabilities_json},
    error::ApiError,
    error::Result as ApiResult,
    events::{EventEnvelope, handle_event},
    extractors::ingress_auth::IngressAuth,
};
pub use error::{Result as ServerResult, ServerError};
pub use state::{AppState, build_state};

pub use crate::routes::build_router;
