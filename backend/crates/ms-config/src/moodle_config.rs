use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MOODLE_TIMEOUT_SECS, MAX_MOODLE_TIMEOUT_SECS,
    MIN_MOODLE_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Remote LMS connection settings.
///
/// The web-service token doubles as the shared secret the LMS presents on
/// inbound callbacks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MoodleConfig {
    /// Site root, e.g. `https://lms.example.com`
    pub url: String,
    pub token: String,
    pub timeout_secs: u64,
}

impl Default for MoodleConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            timeout_secs: DEFAULT_MOODLE_TIMEOUT_SECS,
        }
    }
}

impl MoodleConfig {
    /// Both URL and token are required before any remote call is attempted.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.token.trim().is_empty()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.url.trim();
        if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::moodle(format!(
                "moodle.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        if !(MIN_MOODLE_TIMEOUT_SECS..=MAX_MOODLE_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::moodle(format!(
                "moodle.timeout_secs must be {}-{}, got {}",
                MIN_MOODLE_TIMEOUT_SECS, MAX_MOODLE_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
