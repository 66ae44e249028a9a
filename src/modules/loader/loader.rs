//! Command-tree loader
//!
//! Gathers one subtree per top-level command concurrently, then merges the
//! results into a single tree in manifest order.

use shellcase_core::{CommandDescriptor, CommandNode, CommandTree, CompletionError};
use shellcase_parser::ManifestValidator;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::discovery::ModuleDiscovery;

/// A top-level command that could not be loaded
#[derive(Debug)]
pub struct CommandFailure {
    /// Top-level command name
    pub command: String,

    /// Why the command was dropped
    pub error: CompletionError,
}

/// Per-command failures collected during a load, in manifest order
#[derive(Debug, Default)]
pub struct LoadReport {
    pub failures: Vec<CommandFailure>,
}

impl LoadReport {
    /// Returns true if every command loaded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Names of the commands that failed to load
    pub fn failed_commands(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.command.as_str()).collect()
    }
}

/// Result of loading the command tree
#[derive(Debug)]
pub struct LoadOutcome {
    /// Tree built from every command that loaded
    pub tree: CommandTree,

    /// Commands left out of the tree
    pub report: LoadReport,
}

/// Loads the command tree through a [`ModuleDiscovery`]
pub struct CommandLoader {
    discovery: Arc<dyn ModuleDiscovery>,
}

impl CommandLoader {
    /// Create a loader using the given discovery
    pub fn new(discovery: Arc<dyn ModuleDiscovery>) -> Self {
        Self { discovery }
    }

    /// Load the subtree of every command.
    ///
    /// All commands are loaded in parallel and every task is awaited; a
    /// failing command is recorded in the report and left out of the tree.
    pub async fn load(&self, commands: &[CommandDescriptor]) -> LoadOutcome {
        let mut set = JoinSet::new();

        debug!(
            "Loading {} command(s) via {}",
            commands.len(),
            self.discovery.source_name()
        );

        for (index, descriptor) in commands.iter().cloned().enumerate() {
            let discovery = Arc::clone(&self.discovery);
            set.spawn(async move {
                let result = Self::load_command(discovery.as_ref(), &descriptor).await;
                (index, result)
            });
        }

        // Each task owns exactly one slot
        let mut slots: Vec<Option<Result<CommandNode, CompletionError>>> =
            commands.iter().map(|_| None).collect();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, result)) => slots[index] = Some(result),
                Err(e) => warn!("Command load task failed: {}", e),
            }
        }

        let mut tree = CommandTree::new();
        let mut report = LoadReport::default();
        for (descriptor, slot) in commands.iter().zip(slots) {
            let result = slot.unwrap_or_else(|| {
                Err(CompletionError::Internal(format!(
                    "load task for '{}' did not complete",
                    descriptor.name
                )))
            });

            match result.and_then(|node| tree.push(node)) {
                Ok(()) => {}
                Err(error) => report.failures.push(CommandFailure {
                    command: descriptor.name.clone(),
                    error,
                }),
            }
        }

        debug!(
            "Loaded {} command(s), {} failed",
            tree.children.len(),
            report.failures.len()
        );

        LoadOutcome { tree, report }
    }

    /// Build and validate the subtree of one command
    async fn load_command(
        discovery: &dyn ModuleDiscovery,
        descriptor: &CommandDescriptor,
    ) -> Result<CommandNode, CompletionError> {
        let validator = ManifestValidator::new();
        validator.validate_command_name(&descriptor.name)?;

        let modules = discovery.discover(&descriptor.name).await?;

        let mut node = CommandNode::new(descriptor.name.as_str(), descriptor.description.as_str());
        for module in modules {
            node.push_child(module.into_node())?;
        }

        validator.validate_command(&node)?;

        debug!(
            "Command '{}': {} subcommand(s)",
            node.name,
            node.children.len()
        );
        Ok(node)
    }
}
