//! Error types for the core crate

use thiserror::Error;

/// Errors raised while interpreting world data supplied by the host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A textual attribution tag could not be parsed
    #[error("invalid attribution tag: {0}")]
    InvalidTag(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
