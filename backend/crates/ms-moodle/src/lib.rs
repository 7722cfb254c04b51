//! ms-moodle
//!
//! Client for the Moodle REST web-service API and the site's custom
//! (non web-service) endpoints.

pub(crate) mod client;
pub(crate) mod error;
pub mod form_params;


pub use client::client::{MoodleClient, REST_SERVER_PATH};
pub use client::raw_response::RawResponse;
pub use error::{MoodleError, Result as MoodleResult};

pub use reqwest::Method;
