//! Configuration layer for popeye-view.
//!
//! ## Layers
//! - `flags`: per-run engine flags
//! - `resolver`: request + cluster context to flags
//! - `types`: settings file definitions
//! - `loading`: settings file discovery and parsing

mod error;
mod flags;
mod loading;
mod resolver;
mod types;

pub use error::ConfigError;
pub use flags::{OutputFormat, ScanFlags};
pub use loading::SettingsFormat;
pub use resolver::{ConfigResolver, SPINACH_SUFFIX, sanitize_context_name};
pub use types::Settings;
