use crate::{
    ConfigError, ConfigErrorResult, CookieSource, DEFAULT_COOKIE_PATH, DEFAULT_SSO_ENABLED,
    DEFAULT_SSO_LOGIN_PATH,
};

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SsoConfig {
    pub enabled: bool,
    /// Login endpoint path on the LMS site
    pub login_path: String,
    /// Domain for relayed cookies; use a leading dot to cover subdomains
    pub cookie_domain: String,
    pub cookie_path: String,
    pub cookie_source: CookieSource,
    /// Directory for the legacy cookie-jar file (system temp dir when unset)
    pub tmp_dir: Option<String>,
    /// Skip TLS certificate verification on the login call
    pub accept_invalid_certs: bool,
}

impl Default for SsoConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_SSO_ENABLED,
            login_path: String::from(DEFAULT_SSO_LOGIN_PATH),
            cookie_domain: String::new(),
            cookie_path: String::from(DEFAULT_COOKIE_PATH),
            cookie_source: CookieSource::default(),
            tmp_dir: None,
            accept_invalid_certs: false,
        }
    }
}

impl SsoConfig {
    pub fn tmp_dir(&self) -> PathBuf {
        self.tmp_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if !self.login_path.starts_with('/') {
            return Err(ConfigError::sso(format!(
                "sso.login_path must start with '/', got '{}'",
                self.login_path
            )));
        }

        if !self.cookie_path.starts_with('/') {
            return Err(ConfigError::sso(format!(
                "sso.cookie_path must start with '/', got '{}'",
                self.cookie_path
            )));
        }

        Ok(())
    }
}
