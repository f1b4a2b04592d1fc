//! Error types for the engine crate
//!
//! Rule execution never fails; these errors come only from loading
//! configuration.

use thiserror::Error;

/// Errors raised while preparing the resolver.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration text could not be parsed or holds unknown keys
    #[error("config error: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

impl From<toml::de::Error> for EngineError {
    fn from(e: toml::de::Error) -> Self {
        EngineError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for EngineError {
    fn from(e: toml::ser::Error) -> Self {
        EngineError::Config(e.to_string())
    }
}
