//! Unified error types for Causeway.
//!
//! Only lifecycle operations can fail. Handling an event never returns an
//! error; see [`crate::Causeway::handle`].

use causeway_engine::EngineError;
use thiserror::Error;

/// All Causeway errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A collaborator the engine cannot run without was not supplied
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// Configuration could not be parsed
    #[error("config error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine was already shut down
    #[error("engine already stopped")]
    AlreadyStopped,
}

/// Result type for Causeway operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error prevented the engine from starting.
    pub fn is_startup_failure(&self) -> bool {
        matches!(
            self,
            Error::MissingCollaborator(_) | Error::Config(_) | Error::Io(_)
        )
    }
}

// Convert from engine errors
impl From<EngineError> for Error {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Config(msg) => Error::Config(msg),
            EngineError::Io(io_err) => Error::Io(io_err),
        }
    }
}
