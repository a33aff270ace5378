//! Resolves engine flags for a request.

use super::flags::ScanFlags;
use crate::host::{Connection, ScanRequest};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name suffix of per-context override files.
pub const SPINACH_SUFFIX: &str = "_spinach.yml";

/// Builds [`ScanFlags`] from the request and the live cluster context.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    home: PathBuf,
}

impl ConfigResolver {
    /// `home` is the directory holding `<context>_spinach.yml` files.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Path of the override file for `context`.
    pub fn spinach_path(&self, context: &str) -> PathBuf {
        self.home.join(format!("{}{}", sanitize_context_name(context), SPINACH_SUFFIX))
    }

    pub fn resolve(&self, request: &ScanRequest, connection: &dyn Connection) -> ScanFlags {
        let mut flags = ScanFlags::new();

        if let Some(section) = request.section() {
            flags = flags.with_sections(vec![section.to_string()]);
        }

        match connection.config().current_context_name() {
            Ok(context) => {
                let spinach = self.spinach_path(&context);
                if spinach.is_file() {
                    debug!(path = %spinach.display(), "Using spinach override");
                    flags = flags.with_spinach(spinach);
                }
            }
            Err(e) => {
                debug!(error = %e, "No current context, skipping spinach override");
            }
        }

        flags
    }
}

/// Turns a context name into a single file name component.
pub fn sanitize_context_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '-',
            c if c.is_whitespace() => '-',
            c => c,
        })
        .collect()
}
