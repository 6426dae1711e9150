//! Common error types for Fyyur

use thiserror::Error;

/// Common result type for Fyyur operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Fyyur crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored genre list could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested venue, artist or show does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Submitted field values failed validation
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A referenced record is missing (show creation)
    #[error("Precondition failed: {0}")]
    Precondition(String),
}

impl Error {
    /// True for the error kinds caused by the caller rather than the store
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_) | Error::Validation(_) | Error::Precondition(_)
        )
    }
}
