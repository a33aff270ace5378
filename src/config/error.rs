//! Settings error types.

use super::loading::SettingsFormat;
use std::path::PathBuf;

/// Why a settings file could not be turned into [`super::Settings`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} in settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        format: SettingsFormat,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Settings file {} must end in .yaml, .yml, .json or .toml", path.display())]
    UnsupportedFormat { path: PathBuf },
}
