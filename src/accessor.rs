//! Cluster sanitization as a browsable resource kind.

use crate::adapter::PopFactory;
use crate::config::ConfigResolver;
use crate::engine::SanitizerBuilder;
use crate::error::{PopeyeError, Result};
use crate::host::{Accessor, Factory, Resource, ScanRequest};
use crate::invoker::ScanInvoker;
use crate::report::{self, Section};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Tracks cluster sanitization.
///
/// Holds only shared, read-only collaborators; every `list` call builds its
/// own flags, buffer and sanitizer.
pub struct Popeye<F: Factory> {
    factory: Arc<F>,
    builder: Arc<dyn SanitizerBuilder>,
    resolver: ConfigResolver,
}

impl<F: Factory + 'static> Popeye<F> {
    pub fn new(
        factory: Arc<F>,
        builder: Arc<dyn SanitizerBuilder>,
        resolver: ConfigResolver,
    ) -> Self {
        Self {
            factory,
            builder,
            resolver,
        }
    }

    pub fn resolver(&self) -> &ConfigResolver {
        &self.resolver
    }

    /// Runs a scan and returns the sections with findings.
    pub fn sections(&self, request: &ScanRequest) -> Result<Vec<Section>> {
        let started = Instant::now();
        let result = self.scan(request);
        debug!(elapsed = ?started.elapsed(), ok = result.is_ok(), "Popeye scan finished");
        result
    }

    fn scan(&self, request: &ScanRequest) -> Result<Vec<Section>> {
        let flags = self.resolver.resolve(request, self.factory.client());
        let factory = Box::new(PopFactory::new(Arc::clone(&self.factory)));
        let raw = ScanInvoker::new(self.builder.as_ref()).run(&flags, factory)?;
        report::normalize(&raw)
    }
}

impl<F: Factory + 'static> Accessor for Popeye<F> {
    /// Sanitization is cluster wide, so `namespace` is ignored.
    fn list(&self, request: &ScanRequest, _namespace: &str) -> Result<Vec<Box<dyn Resource>>> {
        let sections = self.sections(request)?;
        Ok(sections
            .into_iter()
            .map(|s| Box::new(s) as Box<dyn Resource>)
            .collect())
    }

    fn get(&self, _request: &ScanRequest, _name: &str) -> Result<Box<dyn Resource>> {
        Err(PopeyeError::NotImplemented("popeye sections cannot be fetched individually"))
    }
}
