//! Settings file discovery and parsing.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::Settings;

/// File names tried, in order, under `<config dir>/popeye-view/`.
const SETTINGS_FILES: [&str; 4] = ["config.yaml", "config.yml", "config.json", "config.toml"];

/// Settings file syntax, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Yaml,
    Json,
    Toml,
}

impl SettingsFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    fn parse(self, content: &str) -> Result<Settings, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
        })
    }
}

impl fmt::Display for SettingsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        })
    }
}

impl Settings {
    /// Reads one settings file. The extension decides the syntax.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = SettingsFormat::from_path(path).ok_or_else(|| {
            ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
        })?;
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        format.parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            format,
            source,
        })
    }

    /// Load settings.
    ///
    /// An explicit path must load. Otherwise the files under
    /// `<config dir>/popeye-view/` are tried in turn; broken ones are
    /// skipped with a warning and defaults apply when none loads.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Ok(Self::discover(dirs::config_dir().map(|d| d.join("popeye-view")))),
        }
    }

    pub(crate) fn discover(dir: Option<PathBuf>) -> Self {
        let Some(dir) = dir else {
            return Self::default();
        };
        for name in SETTINGS_FILES {
            let path = dir.join(name);
            if !path.is_file() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Loaded settings");
                    return settings;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unusable settings file");
                }
            }
        }
        Self::default()
    }
}
