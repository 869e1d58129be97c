//! Snarkbot Error Types
//!
//! Centralized error handling for the response engine.

use thiserror::Error;

/// Central error type for snarkbot
#[derive(Error, Debug)]
pub enum SnarkError {
    #[error("Word list error: {0}")]
    WordList(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for snarkbot operations
pub type SnarkResult<T> = Result<T, SnarkError>;
