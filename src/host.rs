//! Host-side contracts.
//!
//! These are the interfaces the cluster-management UI exposes to resource
//! kinds: a live cluster connection handed out by a factory, and the
//! list/get accessor every resource kind implements.

use crate::error::Result;
use std::any::Any;
use std::fmt;
use thiserror::Error;

/// Failure to determine the active cluster context.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("No current context is set")]
    Unset,

    #[error("Cluster config is unreadable: {source}")]
    Unreadable {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Connection settings for the live cluster.
pub trait ClusterConfig: Send + Sync {
    /// Name of the context the connection currently targets.
    fn current_context_name(&self) -> std::result::Result<String, ContextError>;
}

/// A live cluster connection.
pub trait Connection: Send + Sync {
    fn config(&self) -> &dyn ClusterConfig;
}

/// Hands out the live connection.
pub trait Factory: Send + Sync {
    fn client(&self) -> &dyn Connection;
}

/// A type-erased resource object handed to the UI layer.
pub trait Resource: Any + fmt::Debug + Send + Sync {
    /// Resource kind this object belongs to.
    fn kind(&self) -> &str;

    /// Display name of this object.
    fn name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;
}

/// Per-call options passed down by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanRequest {
    /// Restricts the scan to a single report section when set.
    pub section: Option<String>,
}

impl ScanRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// The section filter, ignoring empty values.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref().filter(|s| !s.is_empty())
    }
}

/// The list/get contract every browsable resource kind implements.
pub trait Accessor {
    /// Lists all resources. `namespace` scopes the listing where the kind
    /// supports it.
    fn list(&self, request: &ScanRequest, namespace: &str) -> Result<Vec<Box<dyn Resource>>>;

    /// Fetches a single resource by name.
    fn get(&self, request: &ScanRequest, name: &str) -> Result<Box<dyn Resource>>;
}
