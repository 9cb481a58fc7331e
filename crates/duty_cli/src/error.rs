//! CLI error types.

use duty_core::types::DateError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `duty` commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
