//! Error types for PTNM code parsing.

use thiserror::Error;

/// Errors that can occur while parsing a PTNM code string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// Parse error at a specific position in the input.
    #[error("parse error at position {position}: {message}")]
    ParseError {
        /// Position in the input where the error occurred.
        position: usize,
        /// Description of the error.
        message: String,
    },

    /// Code string ended before all four axes were read.
    #[error("PTNM code is incomplete: {0}")]
    Incomplete(String),

    /// Empty input provided.
    #[error("empty PTNM code")]
    EmptyCode,
}

/// Result type for PTNM code operations.
pub type CodeResult<T> = std::result::Result<T, CodeError>;
