//! Error types for the API

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The grammar could not segment the document
    #[error("Parse error: {0}")]
    Parse(#[from] crate::error::ParseError),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
