//! Surfaces popeye cluster sanitization reports as a browsable resource
//! collection.
//!
//! The pipeline for one listing is: [`config::ConfigResolver`] builds the
//! flags, [`adapter`] presents the host connection to the engine,
//! [`invoker::ScanInvoker`] runs the engine into a [`buffer::ScanBuffer`],
//! and [`report::normalize`] decodes and filters the result. The
//! [`accessor::Popeye`] facade ties it together behind [`host::Accessor`].

pub mod accessor;
pub mod adapter;
pub mod buffer;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod invoker;
pub mod kube;
pub mod report;
pub mod reporter;
pub mod run;

#[cfg(test)]
pub mod test_utils;

pub use accessor::Popeye;
pub use cli::{Cli, DisplayFormat};
pub use config::{ConfigResolver, OutputFormat, ScanFlags, Settings};
pub use error::{PopeyeError, Result};
pub use host::{Accessor, Resource, ScanRequest};
pub use report::{Section, Tally, normalize};
pub use run::run;
