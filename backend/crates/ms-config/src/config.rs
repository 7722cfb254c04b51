use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, IngressConfig, LoggingConfig, MoodleConfig, ServerConfig, SessionConfig,
    SsoConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub moodle: MoodleConfig,
    pub sso: SsoConfig,
    pub session: SessionConfig,
    pub ingress: IngressConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for MS_CONFIG_DIR env var, else use ./.moodle-sync/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply MS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: MS_CONFIG_DIR env var > ./.moodle-sync/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.moodle.validate()?;
        self.sso.validate()?;
        self.session.validate()?;
        self.ingress.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Log file path, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };

        let dir = PathBuf::from(&self.logging.dir);
        let dir = if dir.is_absolute() {
            dir
        } else {
            Self::config_dir()?.join(dir)
        };

        Ok(Some(dir.join(file)))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        info!(
            "  moodle: {} (token: {}, timeout={}s)",
            if self.moodle.url.is_empty() {
                "<unset>"
            } else {
                &self.moodle.url
            },
            if self.moodle.token.is_empty() {
                "unset"
            } else {
                "set"
            },
            self.moodle.timeout_secs
        );

        info!(
            "  sso: {} (source: {}, domain: '{}', path: '{}')",
            if self.sso.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.sso.cookie_source,
            self.sso.cookie_domain,
            self.sso.cookie_path
        );

        info!("  session: lifetime={}m", self.session.lifetime_minutes);

        info!(
            "  ingress: {}",
            if self.ingress.token.is_some() {
                "token required"
            } else {
                "open"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("MS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("MS_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("MS_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("MS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MS_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("MS_LOG_DIR", &mut self.logging.dir);

        // Moodle
        Self::apply_env_string("MS_MOODLE_URL", &mut self.moodle.url);
        Self::apply_env_string("MS_MOODLE_TOKEN", &mut self.moodle.token);
        Self::apply_env_parse("MS_MOODLE_TIMEOUT_SECS", &mut self.moodle.timeout_secs);

        // SSO
        Self::apply_env_bool("MS_SSO_ENABLED", &mut self.sso.enabled);
        Self::apply_env_string("MS_SSO_LOGIN_PATH", &mut self.sso.login_path);
        Self::apply_env_string("MS_SSO_COOKIE_DOMAIN", &mut self.sso.cookie_domain);
        Self::apply_env_string("MS_SSO_COOKIE_PATH", &mut self.sso.cookie_path);
        Self::apply_env_parse("MS_SSO_COOKIE_SOURCE", &mut self.sso.cookie_source);
        Self::apply_env_option_string("MS_SSO_TMP_DIR", &mut self.sso.tmp_dir);
        Self::apply_env_bool(
            "MS_SSO_ACCEPT_INVALID_CERTS",
            &mut self.sso.accept_invalid_certs,
        );

        // Session
        Self::apply_env_parse(
            "MS_SESSION_LIFETIME_MINUTES",
            &mut self.session.lifetime_minutes,
        );

        // Ingress
        Self::apply_env_option_string("MS_INGRESS_TOKEN", &mut self.ingress.token);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
