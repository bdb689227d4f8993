use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] wx_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] wx_db::DbError),

    #[error("HTTP client error: {0}")]
    Upstream(#[from] crate::clients::UpstreamError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
