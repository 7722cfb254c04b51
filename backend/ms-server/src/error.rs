use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ms_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ms_db::DbError),

    #[error("Moodle client error: {0}")]
    Moodle(#[from] ms_moodle::MoodleError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
