//! Kubeconfig-backed cluster connection.
//!
//! Only the current context name is read; talking to the cluster is left
//! to the sanitizer.

use crate::host::{ClusterConfig, Connection, ContextError, Factory};
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
struct Kubeconfig {
    #[serde(rename = "current-context", default)]
    current_context: Option<String>,
}

/// Kubeconfig file list, optionally pinned to an explicit context.
///
/// Files are merged the way kubectl merges `$KUBECONFIG`: the first file
/// carrying a non-empty `current-context` wins and missing files are
/// skipped.
#[derive(Debug, Clone)]
pub struct KubeConfig {
    paths: Vec<PathBuf>,
    context: Option<String>,
}

impl KubeConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::from_paths(vec![path.into()])
    }

    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            context: None,
        }
    }

    /// Pin the context instead of reading `current-context`.
    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context.filter(|c| !c.is_empty());
        self
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    fn read_context(path: &Path) -> Result<Option<String>, ContextError> {
        let content = fs::read_to_string(path).map_err(|e| ContextError::Unreadable {
            source: Box::new(e),
        })?;
        let config: Kubeconfig =
            serde_yaml::from_str(&content).map_err(|e| ContextError::Unreadable {
                source: Box::new(e),
            })?;
        Ok(config.current_context.filter(|c| !c.is_empty()))
    }
}

impl ClusterConfig for KubeConfig {
    fn current_context_name(&self) -> Result<String, ContextError> {
        if let Some(ref context) = self.context {
            return Ok(context.clone());
        }

        let mut readable = false;
        let mut missing = None;
        for path in &self.paths {
            if let Err(e) = fs::metadata(path)
                && e.kind() == io::ErrorKind::NotFound
            {
                debug!(path = %path.display(), "Skipping missing kubeconfig");
                missing = Some(e);
                continue;
            }
            readable = true;
            if let Some(context) = Self::read_context(path)? {
                return Ok(context);
            }
        }

        match missing {
            Some(e) if !readable => Err(ContextError::Unreadable {
                source: Box::new(e),
            }),
            _ => Err(ContextError::Unset),
        }
    }
}

/// Connection described by a kubeconfig file list.
#[derive(Debug, Clone)]
pub struct KubeConnection {
    config: KubeConfig,
}

impl Connection for KubeConnection {
    fn config(&self) -> &dyn ClusterConfig {
        &self.config
    }
}

/// Factory handing out a single kubeconfig connection.
#[derive(Debug, Clone)]
pub struct KubeFactory {
    connection: KubeConnection,
}

impl KubeFactory {
    pub fn new(config: KubeConfig) -> Self {
        Self {
            connection: KubeConnection { config },
        }
    }
}

impl Factory for KubeFactory {
    fn client(&self) -> &dyn Connection {
        &self.connection
    }
}

/// Default kubeconfig locations: every `$KUBECONFIG` entry, else
/// `~/.kube/config`.
pub fn default_kubeconfig_paths() -> Vec<PathBuf> {
    kubeconfig_paths(std::env::var_os("KUBECONFIG"), dirs::home_dir())
}

fn kubeconfig_paths(env: Option<OsString>, home: Option<PathBuf>) -> Vec<PathBuf> {
    let paths: Vec<PathBuf> = env
        .map(|value| {
            std::env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default();
    if !paths.is_empty() {
        return paths;
    }
    home.map(|d| d.join(".kube").join("config"))
        .into_iter()
        .collect()
}
