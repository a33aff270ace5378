//! Report document types.
//!
//! Field aliases accept both the `report/sections` layout and popeye's own
//! `popeye/sanitizers` layout.

use crate::host::Resource;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::BTreeMap;

/// Resource kind of report sections.
pub const POPEYE_KIND: &str = "popeye";

/// Findings of a section keyed by resource identifier.
pub type Outcome = BTreeMap<String, Vec<Issue>>;

/// Top-level report document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Builder {
    #[serde(alias = "popeye")]
    pub report: Report,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, alias = "sanitizers")]
    pub sections: Vec<Section>,
}

impl Report {
    /// Orders sections by name. Sections sharing a name keep their order.
    pub fn sort_sections(&mut self) {
        self.sections.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

/// One report section, e.g. `pods` or `clusterroles`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(alias = "sanitizer")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gvr: String,
    #[serde(default)]
    pub tally: Tally,
    #[serde(default, alias = "issues")]
    pub outcome: Outcome,
}

impl Section {
    /// Worst level across all issues, if any.
    pub fn max_level(&self) -> Option<Level> {
        self.outcome
            .values()
            .flat_map(|issues| issues.iter().map(|i| i.level))
            .max()
    }

    /// Number of issues across all resources.
    pub fn issue_count(&self) -> usize {
        self.outcome.values().map(Vec::len).sum()
    }
}

impl Resource for Section {
    fn kind(&self) -> &str {
        POPEYE_KIND
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Per-level counters of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tally {
    pub ok: usize,
    pub info: usize,
    pub warning: usize,
    pub error: usize,
    /// Number of scanned resources.
    pub count: usize,
}

impl Tally {
    /// Sum across all levels.
    pub fn sum(&self) -> usize {
        self.ok + self.info + self.warning + self.error
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub gvr: String,
    pub level: Level,
    pub message: String,
}

/// Issue level. Decodes from popeye's numeric codes or from names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "RawLevel")]
pub enum Level {
    Ok,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Ok => "ok",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Code(u64),
    Name(String),
}

impl TryFrom<RawLevel> for Level {
    type Error = String;

    fn try_from(raw: RawLevel) -> Result<Self, String> {
        match raw {
            RawLevel::Code(0) => Ok(Level::Ok),
            RawLevel::Code(1) => Ok(Level::Info),
            RawLevel::Code(2) => Ok(Level::Warn),
            RawLevel::Code(3) => Ok(Level::Error),
            RawLevel::Code(n) => Err(format!("unknown issue level {}", n)),
            RawLevel::Name(name) => match name.to_lowercase().as_str() {
                "ok" => Ok(Level::Ok),
                "info" => Ok(Level::Info),
                "warn" | "warning" => Ok(Level::Warn),
                "error" => Ok(Level::Error),
                _ => Err(format!("unknown issue level {:?}", name)),
            },
        }
    }
}
