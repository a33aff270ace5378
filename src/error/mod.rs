//! Error types for popeye-view.
//!
//! Every pipeline failure is terminal for the call that hit it. There is no
//! partial result and no retry at this layer.

mod context;

pub use context::ScanPhase;

use crate::config::ConfigError;
use crate::engine::EngineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PopeyeError {
    /// The sanitizer could not be constructed or initialized.
    #[error("Failed to {phase} sanitizer: {source}")]
    Initialization {
        phase: ScanPhase,
        #[source]
        source: EngineError,
    },

    /// The sanitizer run itself failed.
    #[error("Sanitize failed: {0}")]
    SanitizeExecution(#[source] EngineError),

    /// The buffered report is not a valid report document.
    #[error("Failed to decode scan report: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, PopeyeError>;
