//! Error types for Voyage Core

use thiserror::Error;

/// Result type alias using VoyageError
pub type Result<T> = std::result::Result<T, VoyageError>;

/// Top-level error type for all Voyage operations
#[derive(Debug, Error)]
pub enum VoyageError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when a book file cannot be turned into a usable record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Missing required field: {0}")]
    MissingField(String),
}
