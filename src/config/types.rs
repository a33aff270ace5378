//! Settings definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the command line front end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding per-context spinach override files.
    pub home: Option<PathBuf>,
    /// Sanitizer executable name or path.
    pub popeye_bin: Option<String>,
    /// Kubeconfig file to read the current context from.
    pub kubeconfig: Option<PathBuf>,
}

impl Settings {
    pub fn popeye_bin(&self) -> &str {
        self.popeye_bin.as_deref().unwrap_or("popeye")
    }

    /// Override directory, defaulting to `~/.popeye-view`.
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.home
            .clone()
            .or_else(|| dirs::home_dir().map(|d| d.join(".popeye-view")))
    }
}
