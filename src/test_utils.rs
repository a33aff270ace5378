#[cfg(test)]
pub mod fixtures {
    use crate::buffer::ScanBuffer;
    use crate::config::ScanFlags;
    use crate::engine::{self, EngineError, OutputTarget, Sanitizer, SanitizerBuilder};
    use crate::host::{ClusterConfig, Connection, ContextError, Factory};
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing::Span;

    /// Host factory with a fixed (or missing) current context.
    pub struct FakeFactory {
        connection: FakeConnection,
    }

    struct FakeConnection {
        config: FakeConfig,
    }

    struct FakeConfig {
        context: Option<String>,
    }

    impl FakeFactory {
        pub fn with_context(context: &str) -> Self {
            Self {
                connection: FakeConnection {
                    config: FakeConfig {
                        context: Some(context.to_string()),
                    },
                },
            }
        }

        pub fn without_context() -> Self {
            Self {
                connection: FakeConnection {
                    config: FakeConfig { context: None },
                },
            }
        }
    }

    impl ClusterConfig for FakeConfig {
        fn current_context_name(&self) -> Result<String, ContextError> {
            self.context.clone().ok_or(ContextError::Unset)
        }
    }

    impl Connection for FakeConnection {
        fn config(&self) -> &dyn ClusterConfig {
            &self.config
        }
    }

    impl Factory for FakeFactory {
        fn client(&self) -> &dyn Connection {
            &self.connection
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Script {
        Emit,
        FailBuild,
        FailInit,
        FailSanitize,
    }

    /// Sanitizer builder that plays back a fixed script and records calls.
    pub struct ScriptedBuilder {
        script: Script,
        payload: String,
        calls: Arc<Mutex<Vec<&'static str>>>,
        flags: Arc<Mutex<Vec<ScanFlags>>>,
    }

    impl ScriptedBuilder {
        fn new(script: Script, payload: &str) -> Self {
            Self {
                script,
                payload: payload.to_string(),
                calls: Arc::default(),
                flags: Arc::default(),
            }
        }

        pub fn emitting(payload: &str) -> Self {
            Self::new(Script::Emit, payload)
        }

        pub fn failing_build() -> Self {
            Self::new(Script::FailBuild, "")
        }

        pub fn failing_init() -> Self {
            Self::new(Script::FailInit, "")
        }

        pub fn failing_sanitize() -> Self {
            Self::new(Script::FailSanitize, "")
        }

        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        pub fn built_with(&self) -> Vec<ScanFlags> {
            self.flags.lock().unwrap().clone()
        }
    }

    impl SanitizerBuilder for ScriptedBuilder {
        fn build(&self, flags: &ScanFlags, _span: Span) -> Result<Box<dyn Sanitizer>, EngineError> {
            self.calls.lock().unwrap().push("build");
            self.flags.lock().unwrap().push(flags.clone());
            if self.script == Script::FailBuild {
                return Err(EngineError::InvalidFlags("scripted".to_string()));
            }
            Ok(Box::new(ScriptedSanitizer {
                script: self.script,
                payload: self.payload.clone(),
                calls: Arc::clone(&self.calls),
                factory: None,
                target: None,
            }))
        }
    }

    struct ScriptedSanitizer {
        script: Script,
        payload: String,
        calls: Arc<Mutex<Vec<&'static str>>>,
        factory: Option<Box<dyn engine::Factory>>,
        target: Option<Box<dyn OutputTarget>>,
    }

    impl Sanitizer for ScriptedSanitizer {
        fn set_factory(&mut self, factory: Box<dyn engine::Factory>) {
            self.calls.lock().unwrap().push("set_factory");
            self.factory = Some(factory);
        }

        fn init(&mut self) -> Result<(), EngineError> {
            self.calls.lock().unwrap().push("init");
            if self.script == Script::FailInit {
                return Err(EngineError::Connection("cluster unreachable".to_string()));
            }
            let factory = self
                .factory
                .as_ref()
                .ok_or(EngineError::NotReady("no factory"))?;
            factory.client().config().current_context_name().map(|_| ())
        }

        fn set_output_target(&mut self, target: Box<dyn OutputTarget>) {
            self.calls.lock().unwrap().push("set_output_target");
            self.target = Some(target);
        }

        fn sanitize(&mut self) -> Result<(), EngineError> {
            self.calls.lock().unwrap().push("sanitize");
            if self.script == Script::FailSanitize {
                return Err(EngineError::Exit {
                    program: "popeye".to_string(),
                    status: "exit status: 1".to_string(),
                    stderr: "scripted".to_string(),
                });
            }
            let target = self
                .target
                .as_mut()
                .ok_or(EngineError::NotReady("no output target"))?;
            target
                .write_all(self.payload.as_bytes())
                .map_err(EngineError::Output)?;
            target.close().map_err(EngineError::Output)
        }
    }

    /// A section document with the given `[ok, info, warning, error]`
    /// tally, declared count, and number of outcome entries.
    pub fn section_json(name: &str, levels: [usize; 4], count: usize, outcomes: usize) -> String {
        let outcome: Vec<String> = (0..outcomes)
            .map(|i| {
                format!(
                    r#""default/{name}-{i}": [{{"group": "__root__", "gvr": "v1/{name}", "level": 2, "message": "finding {i}"}}]"#
                )
            })
            .collect();
        format!(
            r#"{{"name": "{name}", "tally": {{"ok": {}, "info": {}, "warning": {}, "error": {}, "count": {count}}}, "outcome": {{{}}}}}"#,
            levels[0],
            levels[1],
            levels[2],
            levels[3],
            outcome.join(", ")
        )
    }

    pub fn report_json(sections: &[String]) -> String {
        format!(r#"{{"report": {{"sections": [{}]}}}}"#, sections.join(", "))
    }

    /// Runs `f` with a debug-level subscriber and returns its log lines.
    pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
        let buffer = ScanBuffer::new();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let logs = String::from_utf8(buffer.take().unwrap()).unwrap();
        (result, logs)
    }
}
