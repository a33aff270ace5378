//! Drives one sanitizer run into memory.

use crate::buffer::ScanBuffer;
use crate::config::ScanFlags;
use crate::engine::{EngineError, Factory, SanitizerBuilder};
use crate::error::{PopeyeError, Result, ScanPhase};
use tracing::{debug, debug_span};

/// Runs the sanitizer once and returns the raw report bytes.
pub struct ScanInvoker<'a> {
    builder: &'a dyn SanitizerBuilder,
}

impl<'a> ScanInvoker<'a> {
    pub fn new(builder: &'a dyn SanitizerBuilder) -> Self {
        Self { builder }
    }

    /// Builds, initializes and runs the sanitizer with `flags` against
    /// `factory`. Failures are returned as-is; nothing is retried.
    pub fn run(&self, flags: &ScanFlags, factory: Box<dyn Factory>) -> Result<Vec<u8>> {
        let span = debug_span!("popeye", sections = ?flags.sections());

        let mut sanitizer = self
            .builder
            .build(flags, span)
            .map_err(|e| PopeyeError::Initialization {
                phase: ScanPhase::Build,
                source: e,
            })?;
        sanitizer.set_factory(factory);
        sanitizer
            .init()
            .map_err(|e| PopeyeError::Initialization {
                phase: ScanPhase::Init,
                source: e,
            })?;

        let buffer = ScanBuffer::new();
        sanitizer.set_output_target(Box::new(buffer.clone()));
        if let Err(e) = sanitizer.sanitize() {
            debug!(sections = ?flags.sections(), error = %e, "Sanitize failed");
            return Err(PopeyeError::SanitizeExecution(e));
        }

        buffer
            .take()
            .map_err(|e| PopeyeError::SanitizeExecution(EngineError::Output(e)))
    }
}
