//! Engine-side error types.

use thiserror::Error;

/// Error type for sanitizer construction and runs.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid scan flags: {0}")]
    InvalidFlags(String),

    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to write scan output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Cluster connection error: {0}")]
    Connection(String),

    #[error("Sanitizer is not ready: {0}")]
    NotReady(&'static str),
}
