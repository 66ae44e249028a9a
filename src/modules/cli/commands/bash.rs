//! Bash command implementation

use clap::Args;
use shellcase_core::CompletionError;
use shellcase_generator::generate_script;
use std::io::Write;
use tracing::info;

use super::load_tree;

/// Bash command arguments
#[derive(Args, Debug)]
pub struct BashCommand {
    /// Fail (after printing the script) if any command could not be loaded
    #[arg(long)]
    pub strict: bool,
}

impl BashCommand {
    /// Execute the bash command
    pub async fn execute(&self, config_path: &str) -> Result<(), CompletionError> {
        let (manifest, outcome) = load_tree(config_path).await?;

        let script = generate_script(&manifest, &outcome.tree);
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(script.as_bytes())?;
        stdout.flush()?;

        info!(
            "Generated completions for {} command(s)",
            outcome.tree.children.len()
        );

        if self.strict && !outcome.report.is_clean() {
            return Err(CompletionError::Validation(format!(
                "Failed to load: {}",
                outcome.report.failed_commands().join(", ")
            )));
        }

        Ok(())
    }
}
