//! Presents the host connection to the engine.
//!
//! Each wrapper delegates straight through to the host object it holds.

use crate::engine::{self, EngineError};
use crate::host;
use std::sync::Arc;

/// Host factory seen as an engine factory.
pub struct PopFactory<F: host::Factory> {
    factory: Arc<F>,
}

impl<F: host::Factory> PopFactory<F> {
    pub fn new(factory: Arc<F>) -> Self {
        Self { factory }
    }
}

impl<F: host::Factory> engine::Factory for PopFactory<F> {
    fn client(&self) -> Box<dyn engine::Connection + '_> {
        Box::new(PopConnection::new(self.factory.client()))
    }
}

/// Host connection seen as an engine connection.
pub struct PopConnection<'a> {
    connection: &'a dyn host::Connection,
}

impl<'a> PopConnection<'a> {
    pub fn new(connection: &'a dyn host::Connection) -> Self {
        Self { connection }
    }
}

impl engine::Connection for PopConnection<'_> {
    fn config(&self) -> Box<dyn engine::Config + '_> {
        Box::new(PopConfig {
            config: self.connection.config(),
        })
    }
}

struct PopConfig<'a> {
    config: &'a dyn host::ClusterConfig,
}

impl engine::Config for PopConfig<'_> {
    fn current_context_name(&self) -> Result<String, EngineError> {
        self.config
            .current_context_name()
            .map_err(|e| EngineError::Connection(e.to_string()))
    }
}
