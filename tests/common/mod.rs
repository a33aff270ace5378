#![allow(dead_code)]

use popeye_view::ScanFlags;
use popeye_view::engine::{self, EngineError, OutputTarget, Sanitizer, SanitizerBuilder};
use popeye_view::host::{ClusterConfig, Connection, ContextError, Factory};
use std::sync::{Arc, Mutex};
use tracing::Span;

pub struct StaticConfig(pub Option<String>);

impl ClusterConfig for StaticConfig {
    fn current_context_name(&self) -> Result<String, ContextError> {
        self.0.clone().ok_or(ContextError::Unset)
    }
}

pub struct StaticConnection(pub StaticConfig);

impl Connection for StaticConnection {
    fn config(&self) -> &dyn ClusterConfig {
        &self.0
    }
}

/// Host factory pinned to one context.
pub struct StaticFactory(pub StaticConnection);

impl StaticFactory {
    pub fn new(context: Option<&str>) -> Self {
        Self(StaticConnection(StaticConfig(context.map(str::to_string))))
    }
}

impl Factory for StaticFactory {
    fn client(&self) -> &dyn Connection {
        &self.0
    }
}

/// Engine whose report has one section per requested section, or a single
/// section named after the cluster context when no filter is set. Each
/// section carries one warning per resource in `resources`.
#[derive(Default)]
pub struct EchoBuilder {
    pub resources: Vec<String>,
    pub seen: Arc<Mutex<Vec<ScanFlags>>>,
}

impl EchoBuilder {
    pub fn new(resources: &[&str]) -> Self {
        Self {
            resources: resources.iter().map(|r| r.to_string()).collect(),
            seen: Arc::default(),
        }
    }

    pub fn seen(&self) -> Vec<ScanFlags> {
        self.seen.lock().unwrap().clone()
    }
}

impl SanitizerBuilder for EchoBuilder {
    fn build(&self, flags: &ScanFlags, _span: Span) -> Result<Box<dyn Sanitizer>, EngineError> {
        self.seen.lock().unwrap().push(flags.clone());
        Ok(Box::new(EchoSanitizer {
            flags: flags.clone(),
            resources: self.resources.clone(),
            factory: None,
            context: None,
            target: None,
        }))
    }
}

struct EchoSanitizer {
    flags: ScanFlags,
    resources: Vec<String>,
    factory: Option<Box<dyn engine::Factory>>,
    context: Option<String>,
    target: Option<Box<dyn OutputTarget>>,
}

impl Sanitizer for EchoSanitizer {
    fn set_factory(&mut self, factory: Box<dyn engine::Factory>) {
        self.factory = Some(factory);
    }

    fn init(&mut self) -> Result<(), EngineError> {
        let factory = self
            .factory
            .as_ref()
            .ok_or(EngineError::NotReady("no factory"))?;
        self.context = Some(factory.client().config().current_context_name()?);
        Ok(())
    }

    fn set_output_target(&mut self, target: Box<dyn OutputTarget>) {
        self.target = Some(target);
    }

    fn sanitize(&mut self) -> Result<(), EngineError> {
        let names = match self.flags.sections() {
            Some(sections) => sections.to_vec(),
            None => vec![self.context.clone().unwrap_or_default()],
        };
        let outcome: serde_json::Map<String, serde_json::Value> = self
            .resources
            .iter()
            .map(|r| {
                (
                    r.clone(),
                    serde_json::json!([{"group": "__root__", "gvr": "v1/pods", "level": 2, "message": "warned"}]),
                )
            })
            .collect();
        let sections: Vec<serde_json::Value> = names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "name": name,
                    "tally": {"warning": self.resources.len(), "count": 999},
                    "outcome": outcome,
                })
            })
            .collect();
        let doc = serde_json::json!({"report": {"sections": sections}});

        let target = self
            .target
            .as_mut()
            .ok_or(EngineError::NotReady("no target"))?;
        serde_json::to_writer(&mut *target, &doc)
            .map_err(|e| EngineError::Output(e.into()))?;
        target.close().map_err(EngineError::Output)
    }
}
