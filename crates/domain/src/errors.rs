//! Error types used throughout the roster model

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Rosterline
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RosterError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
