use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum DisplayFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "popeye-view",
    version,
    about = "Show popeye cluster sanitization results by section",
    long_about = "popeye-view runs the popeye cluster sanitizer against the current kube context and lists the report sections that have findings."
)]
pub struct Cli {
    /// Only scan this report section (e.g. pods, secrets)
    #[arg(short, long)]
    pub section: Option<String>,

    /// Namespace (accepted for compatibility; scans are cluster wide)
    #[arg(short, long, default_value = "")]
    pub namespace: String,

    /// Kube context to scan instead of the kubeconfig's current context
    #[arg(long)]
    pub context: Option<String>,

    /// Kubeconfig file
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Directory holding <context>_spinach.yml override files
    #[arg(long)]
    pub home: Option<PathBuf>,

    /// popeye executable
    #[arg(long)]
    pub popeye_bin: Option<String>,

    /// Settings file (YAML, JSON or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = DisplayFormat::Table)]
    pub format: DisplayFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Debug logging
    #[arg(long)]
    pub debug: bool,
}
