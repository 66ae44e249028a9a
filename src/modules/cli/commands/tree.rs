//! Tree command implementation

use clap::Args;
use shellcase_core::CompletionError;

use super::load_tree;

/// Tree command arguments
#[derive(Args, Debug)]
pub struct TreeCommand {
    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

impl TreeCommand {
    /// Execute the tree command
    pub async fn execute(&self, config_path: &str) -> Result<(), CompletionError> {
        let (_, outcome) = load_tree(config_path).await?;

        let json = if self.compact {
            serde_json::to_string(&outcome.tree)?
        } else {
            serde_json::to_string_pretty(&outcome.tree)?
        };
        println!("{}", json);

        Ok(())
    }
}
