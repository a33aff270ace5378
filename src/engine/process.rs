//! Sanitizer backed by the `popeye` executable.

use super::error::EngineError;
use super::traits::{Factory, OutputTarget, Sanitizer, SanitizerBuilder};
use crate::config::ScanFlags;
use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, Output};
use tracing::{Span, debug};

/// Builds [`ProcessSanitizer`] runs for a given executable.
#[derive(Debug, Clone)]
pub struct ProcessSanitizerBuilder {
    program: String,
}

impl Default for ProcessSanitizerBuilder {
    fn default() -> Self {
        Self::new("popeye")
    }
}

impl ProcessSanitizerBuilder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl SanitizerBuilder for ProcessSanitizerBuilder {
    fn build(&self, flags: &ScanFlags, span: Span) -> Result<Box<dyn Sanitizer>, EngineError> {
        if self.program.trim().is_empty() {
            return Err(EngineError::InvalidFlags(
                "sanitizer program is empty".to_string(),
            ));
        }
        if let Some(sections) = flags.sections()
            && sections.iter().any(|s| s.trim().is_empty())
        {
            return Err(EngineError::InvalidFlags(
                "section names must not be blank".to_string(),
            ));
        }

        Ok(Box::new(ProcessSanitizer {
            program: self.program.clone(),
            flags: flags.clone(),
            span,
            factory: None,
            context: None,
            initialized: false,
            target: None,
        }))
    }
}

/// One `popeye` run.
///
/// `init` checks that the executable answers and picks up the cluster
/// context when one is set; `sanitize` runs the scan and copies stdout to
/// the target. Without a context popeye falls back to its own kubeconfig
/// resolution.
pub struct ProcessSanitizer {
    program: String,
    flags: ScanFlags,
    span: Span,
    factory: Option<Box<dyn Factory>>,
    context: Option<String>,
    initialized: bool,
    target: Option<Box<dyn OutputTarget>>,
}

impl ProcessSanitizer {
    /// Command line arguments for the scan.
    pub fn args(&self) -> Vec<OsString> {
        scan_args(&self.flags, self.context.as_deref())
    }

    fn exec(&self, args: &[OsString]) -> Result<Output, EngineError> {
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| EngineError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(EngineError::Exit {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }
}

impl Sanitizer for ProcessSanitizer {
    fn set_factory(&mut self, factory: Box<dyn Factory>) {
        self.factory = Some(factory);
    }

    fn init(&mut self) -> Result<(), EngineError> {
        let _entered = self.span.clone().entered();

        let factory = self
            .factory
            .as_ref()
            .ok_or(EngineError::NotReady("no cluster factory installed"))?;
        let context = match factory.client().config().current_context_name() {
            Ok(context) => {
                debug!(context = %context, "Resolved cluster context");
                Some(context)
            }
            Err(e) => {
                debug!(error = %e, "No cluster context, deferring to popeye defaults");
                None
            }
        };

        self.exec(&[OsString::from("version")])?;
        self.context = context;
        self.initialized = true;
        Ok(())
    }

    fn set_output_target(&mut self, target: Box<dyn OutputTarget>) {
        self.target = Some(target);
    }

    fn sanitize(&mut self) -> Result<(), EngineError> {
        let _entered = self.span.clone().entered();

        if !self.initialized {
            return Err(EngineError::NotReady("init was not called"));
        }
        let args = self.args();
        debug!(program = %self.program, ?args, "Running sanitizer");
        let output = self.exec(&args)?;

        let target = self
            .target
            .as_mut()
            .ok_or(EngineError::NotReady("no output target installed"))?;
        target
            .write_all(&output.stdout)
            .map_err(EngineError::Output)?;
        target.close().map_err(EngineError::Output)
    }
}

fn scan_args(flags: &ScanFlags, context: Option<&str>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-o".into(), flags.output().as_str().into()];
    if let Some(context) = context {
        args.push("--context".into());
        args.push(context.into());
    }
    if let Some(sections) = flags.sections() {
        args.push("-s".into());
        args.push(sections.join(",").into());
    }
    if let Some(spinach) = flags.spinach() {
        args.push("-f".into());
        args.push(spinach.as_os_str().to_os_string());
    }
    args
}
