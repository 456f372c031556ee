//! Common error types for RetroSynth

use thiserror::Error;

/// Common result type for RetroSynth operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the server and tools
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unique constraint violated (e.g. duplicate preset name)
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Error::Conflict(db_err.message().to_string());
            }
        }
        Error::Database(err)
    }
}
