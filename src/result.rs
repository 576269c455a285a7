use thiserror::Error;

/// Main error type for schema deployment
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[cfg(feature = "postgresql")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl DeployError {
    pub fn config(msg: impl Into<String>) -> Self {
        DeployError::Config(msg.into())
    }
}

/// Type alias for Results using DeployError
pub type Result<T> = std::result::Result<T, DeployError>;
