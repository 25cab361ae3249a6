//! Error types for markscope.

use thiserror::Error;

/// Primary error type for mark analysis.
#[derive(Error, Debug)]
pub enum MarkError {
    /// A marked line did not end in two coordinate pairs.
    #[error("insufficient numeric data: need 4 numeric tokens, found {found}")]
    InsufficientNumericData { found: usize },

    /// Neither mark family was requested.
    #[error("no mark family selected (select at least one of TVP/AGA)")]
    NoFamilySelected,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for MarkError.
pub type Result<T> = std::result::Result<T, MarkError>;
