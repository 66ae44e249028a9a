//! Command tree: top-level commands, their subcommands and option lists

use serde::{Deserialize, Serialize};

use super::OptionSpec;
use crate::error::{CompletionError, Result};

/// One selectable token at a given depth of the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandNode {
    /// Shell match token, unique among siblings
    pub name: String,

    /// Human-readable description (comments and metadata only)
    #[serde(default)]
    pub description: String,

    /// Commands at the next depth, in completion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CommandNode>,

    /// Options accepted by this command when it is a subcommand
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionSpec>,
}

/// Root of the command tree; its children are the top-level commands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandTree {
    /// Top-level commands in completion order
    #[serde(default)]
    pub children: Vec<CommandNode>,
}

impl CommandNode {
    /// Create a new leaf node
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            children: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Add an option to this node
    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Add a child node, rejecting a name already used by a sibling
    pub fn push_child(&mut self, child: CommandNode) -> Result<()> {
        if self.find_child(&child.name).is_some() {
            return Err(CompletionError::DuplicateName {
                scope: format!("command '{}'", self.name),
                name: child.name,
            });
        }
        self.children.push(child);
        Ok(())
    }

    /// Builder variant of [`CommandNode::push_child`]
    pub fn with_child(mut self, child: CommandNode) -> Result<Self> {
        self.push_child(child)?;
        Ok(self)
    }

    /// Find a direct child by name
    pub fn find_child(&self, name: &str) -> Option<&CommandNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Names of the direct children, in order
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }
}

impl CommandTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from top-level nodes, rejecting duplicate names
    pub fn from_nodes(nodes: impl IntoIterator<Item = CommandNode>) -> Result<Self> {
        let mut tree = Self::new();
        for node in nodes {
            tree.push(node)?;
        }
        Ok(tree)
    }

    /// Add a top-level command, rejecting a name already in the tree
    pub fn push(&mut self, node: CommandNode) -> Result<()> {
        if self.find(&node.name).is_some() {
            return Err(CompletionError::DuplicateName {
                scope: "top-level commands".to_string(),
                name: node.name,
            });
        }
        self.children.push(node);
        Ok(())
    }

    /// Find a top-level command by name
    pub fn find(&self, name: &str) -> Option<&CommandNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Names of all top-level commands, in order
    pub fn command_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns true if the tree has no top-level commands
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
