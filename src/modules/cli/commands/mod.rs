//! CLI commands

mod bash;
mod init;
mod tree;

pub use bash::BashCommand;
pub use init::InitCommand;
pub use tree::TreeCommand;

use clap::{Parser, Subcommand};
use shellcase_core::{CompletionError, Manifest};
use shellcase_loader::{load_manifest, LoadOutcome, LoadReport};
use shellcase_parser::parse_file;
use std::path::Path;
use tracing::{debug, info, warn};

/// Shellcase - bash completion generator for multi-level CLIs
#[derive(Parser, Debug)]
#[command(name = "shellcase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Manifest file path
    ///
    /// This is a *global* option so it can be specified after subcommands,
    /// e.g. `shellcase bash -f completion.yaml`.
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        default_value = "completion.yaml"
    )]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the bash completion script to stdout
    Bash(BashCommand),

    /// Print the resolved command tree as JSON
    Tree(TreeCommand),

    /// Scaffold a manifest and an example module
    Init(InitCommand),
}

impl Cli {
    /// Manifest path as given on the command line
    pub fn config_path(&self) -> &str {
        &self.config
    }
}

/// Read the manifest and load its command tree.
///
/// Module directories are resolved relative to the manifest's directory.
pub(crate) async fn load_tree(config_path: &str) -> Result<(Manifest, LoadOutcome), CompletionError> {
    info!("Loading manifest from: {}", config_path);
    let manifest = parse_file(config_path)?;

    let base_dir = Path::new(config_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    debug!(
        "Commands directory: {}",
        base_dir.join(&manifest.commands_dir).display()
    );

    let outcome = load_manifest(&manifest, base_dir).await;
    log_report(&outcome.report);
    Ok((manifest, outcome))
}

/// Log every command that was left out of the tree
pub(crate) fn log_report(report: &LoadReport) {
    for failure in &report.failures {
        warn!(
            kind = failure.error.kind(),
            "Skipping completions for '{}': {}", failure.command, failure.error
        );
    }
}
