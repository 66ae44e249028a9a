//! Discovery trait definition

use async_trait::async_trait;
use shellcase_core::{CommandNode, CompletionError, OptionSpec};
use shellcase_parser::ModuleMetadata;

/// One subcommand module as returned by discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcommandModule {
    /// Subcommand name (module basename)
    pub name: String,

    /// Subcommand description
    pub description: String,

    /// Declared options in module order
    pub options: Vec<OptionSpec>,
}

impl SubcommandModule {
    /// Create a module without options
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    /// Create a module from parsed metadata
    pub fn from_metadata(name: impl Into<String>, metadata: ModuleMetadata) -> Self {
        Self {
            name: name.into(),
            description: metadata.description,
            options: metadata.options,
        }
    }

    /// Add an option to this module
    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Convert into a subcommand node of the command tree
    pub fn into_node(self) -> CommandNode {
        CommandNode {
            name: self.name,
            description: self.description,
            children: Vec::new(),
            options: self.options,
        }
    }
}

/// Trait for subcommand module sources
///
/// Implementations return every subcommand of `command`, sorted by name.
#[async_trait]
pub trait ModuleDiscovery: Send + Sync {
    /// Discover and load the subcommand modules of one top-level command
    ///
    /// # Errors
    /// * `CompletionError::Discovery` if the modules cannot be located
    /// * `CompletionError::Load` if a module cannot be read
    async fn discover(&self, command: &str) -> Result<Vec<SubcommandModule>, CompletionError>;

    /// Get the discovery source name (used in logs)
    fn source_name(&self) -> &'static str;
}
