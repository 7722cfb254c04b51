use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Protection for the host-facing event endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IngressConfig {
    /// Bearer token the host must send; open when unset
    pub token: Option<String>,
}

impl IngressConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(token) = &self.token
            && token.trim().is_empty()
        {
            return Err(ConfigError::config("ingress.token cannot be blank when set"));
        }

        Ok(())
    }
}
