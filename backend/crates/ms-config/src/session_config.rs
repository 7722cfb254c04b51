use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_LIFETIME_MINUTES,
    MAX_SESSION_LIFETIME_MINUTES, MIN_SESSION_LIFETIME_MINUTES,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Host sessions older than this are treated as expired
    pub lifetime_minutes: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lifetime_minutes: DEFAULT_SESSION_LIFETIME_MINUTES,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_SESSION_LIFETIME_MINUTES..=MAX_SESSION_LIFETIME_MINUTES)
            .contains(&self.lifetime_minutes)
        {
            return Err(ConfigError::config(format!(
                "session.lifetime_minutes must be {}-{}, got {}",
                MIN_SESSION_LIFETIME_MINUTES, MAX_SESSION_LIFETIME_MINUTES, self.lifetime_minutes
            )));
        }

        Ok(())
    }
}
