mod config;
mod cookie_source;
mod database_config;
mod error;
mod ingress_config;
mod log_level;
mod logging_config;
mod moodle_config;
mod server_config;
mod session_config;
mod sso_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use cookie_source::CookieSource;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use ingress_config::IngressConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use moodle_config::MoodleConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;
pub use sso_config::SsoConfig;

/// Environment variable naming the config directory.
pub const CONFIG_DIR_ENV: &str = "MS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".moodle-sync";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8089;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "moodle-sync.db";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_MOODLE_TIMEOUT_SECS: u64 = 30;
const MIN_MOODLE_TIMEOUT_SECS: u64 = 1;
const MAX_MOODLE_TIMEOUT_SECS: u64 = 300;

const DEFAULT_SSO_ENABLED: bool = false;
const DEFAULT_SSO_LOGIN_PATH: &str = "/auth/jmoodle/jmoodle_login.php";
const DEFAULT_COOKIE_PATH: &str = "/";

const DEFAULT_SESSION_LIFETIME_MINUTES: u64 = 15;
const MIN_SESSION_LIFETIME_MINUTES: u64 = 1;
const MAX_SESSION_LIFETIME_MINUTES: u64 = 10_080;
