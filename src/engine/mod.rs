//! Sanitization engine layer.
//!
//! The engine scans a live cluster and scores findings per section. This
//! crate only drives it, through the traits in [`traits`]:
//! - `SanitizerBuilder` constructs a run from flags and a logging span
//! - `Sanitizer` takes a cluster factory, an output target, and runs
//! - `ProcessSanitizer` drives the `popeye` executable

pub mod error;
pub mod process;
pub mod traits;

pub use error::EngineError;
pub use process::{ProcessSanitizer, ProcessSanitizerBuilder};
pub use traits::{Config, Connection, Factory, OutputTarget, Sanitizer, SanitizerBuilder};
