//! Shellcase CLI
//!
//! Command-line interface for the Shellcase completion generator.

use clap::Parser;
use shellcase_cli::{Cli, Commands};
use shellcase_core::CompletionError;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CompletionError> {
    let cli = Cli::parse();
    let config_path = cli.config_path().to_string();

    // Initialize logging; stdout is reserved for the generated output
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Bash(cmd) => {
            cmd.execute(&config_path).await?;
        }
        Commands::Tree(cmd) => {
            cmd.execute(&config_path).await?;
        }
        Commands::Init(cmd) => {
            cmd.execute().await?;
        }
    }

    Ok(())
}
