//! Command line pipeline: settings, collaborators, listing and output.

use crate::accessor::Popeye;
use crate::cli::{Cli, DisplayFormat};
use crate::config::{ConfigResolver, Settings};
use crate::engine::ProcessSanitizerBuilder;
use crate::error::Result;
use crate::host::{Accessor, ScanRequest};
use crate::kube::{KubeConfig, KubeFactory, default_kubeconfig_paths};
use crate::report::sections_of;
use crate::reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

/// Builds the accessor from settings and CLI overrides.
pub fn build_accessor(cli: &Cli, settings: &Settings) -> Popeye<KubeFactory> {
    let kubeconfig = kube_config(cli, settings);
    let home = cli
        .home
        .clone()
        .or_else(|| settings.home_dir())
        .unwrap_or_else(|| PathBuf::from("."));
    let program = cli
        .popeye_bin
        .clone()
        .unwrap_or_else(|| settings.popeye_bin().to_string());

    debug!(
        kubeconfig = ?kubeconfig.paths(),
        home = %home.display(),
        program = %program,
        "Building accessor"
    );

    let factory = KubeFactory::new(kubeconfig);
    Popeye::new(
        Arc::new(factory),
        Arc::new(ProcessSanitizerBuilder::new(program)),
        ConfigResolver::new(home),
    )
}

/// Explicit kubeconfig (CLI, then settings) or the default lookup list.
fn kube_config(cli: &Cli, settings: &Settings) -> KubeConfig {
    match cli.kubeconfig.clone().or_else(|| settings.kubeconfig.clone()) {
        Some(path) => KubeConfig::new(path),
        None => KubeConfig::from_paths(default_kubeconfig_paths()),
    }
    .with_context(cli.context.clone())
}

/// Runs one listing and renders it.
pub fn render(cli: &Cli) -> Result<String> {
    let settings = Settings::load(cli.config.as_deref())?;
    let accessor = build_accessor(cli, &settings);

    let mut request = ScanRequest::new();
    if let Some(ref section) = cli.section {
        request = request.with_section(section.clone());
    }

    info!(section = ?request.section(), "Listing popeye sections");
    let resources = accessor.list(&request, &cli.namespace)?;
    let sections = sections_of(&resources);

    let output = match cli.format {
        DisplayFormat::Table => TerminalReporter::new(cli.verbose).report(&sections),
        DisplayFormat::Json => JsonReporter::new().report(&sections),
    };
    Ok(output)
}

pub fn run(cli: &Cli) -> ExitCode {
    match render(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
