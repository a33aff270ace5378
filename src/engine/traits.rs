//! Engine invocation contract.

use super::error::EngineError;
use crate::config::ScanFlags;
use std::io::{self, Write};
use tracing::Span;

/// Cluster connection settings as the engine sees them.
pub trait Config: Send + Sync {
    fn current_context_name(&self) -> Result<String, EngineError>;
}

/// Cluster connection as the engine sees it.
pub trait Connection: Send + Sync {
    fn config(&self) -> Box<dyn Config + '_>;
}

/// Source of cluster connections for an engine run.
pub trait Factory: Send + Sync {
    fn client(&self) -> Box<dyn Connection + '_>;
}

/// A writable, closeable report destination.
pub trait OutputTarget: Write + Send {
    fn close(&mut self) -> io::Result<()>;
}

/// One sanitization run.
///
/// Callers install a factory, call `init`, install an output target and
/// finally call `sanitize`, in that order.
pub trait Sanitizer: Send {
    fn set_factory(&mut self, factory: Box<dyn Factory>);

    /// Prepares the run. Fails when the flags are unusable or the cluster
    /// cannot be reached.
    fn init(&mut self) -> Result<(), EngineError>;

    fn set_output_target(&mut self, target: Box<dyn OutputTarget>);

    /// Scans the cluster and writes the report to the output target.
    fn sanitize(&mut self) -> Result<(), EngineError>;
}

/// Constructs sanitizer runs.
pub trait SanitizerBuilder: Send + Sync {
    /// Builds a run for `flags`. The run logs under `span`.
    fn build(&self, flags: &ScanFlags, span: Span) -> Result<Box<dyn Sanitizer>, EngineError>;
}
