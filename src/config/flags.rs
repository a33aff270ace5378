//! Per-run engine flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Report encoding requested from the engine.
///
/// Only JSON is supported since the report is decoded afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flags for a single sanitizer run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanFlags {
    output: OutputFormat,
    sections: Option<Vec<String>>,
    spinach: Option<PathBuf>,
}

impl ScanFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the run to the given sections.
    pub fn with_sections(mut self, sections: Vec<String>) -> Self {
        self.sections = Some(sections);
        self
    }

    /// Use the given spinach override file.
    pub fn with_spinach(mut self, path: impl Into<PathBuf>) -> Self {
        self.spinach = Some(path.into());
        self
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }

    pub fn sections(&self) -> Option<&[String]> {
        self.sections.as_deref()
    }

    pub fn spinach(&self) -> Option<&Path> {
        self.spinach.as_deref()
    }
}
