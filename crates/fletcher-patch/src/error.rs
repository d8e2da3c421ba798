//! Error types for the patching engine

use std::io;

use thiserror::Error;

/// Result type alias for patcher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for patcher operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration is absent or unusable; fatal before any record is touched
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Settings document failed to parse
    #[error("Malformed settings: {0}")]
    Settings(#[from] serde_json::Error),
}

impl Error {
    /// Create a new Config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}
