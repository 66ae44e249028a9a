//! Root manifest describing the target program and its top-level commands

use serde::{Deserialize, Serialize};

/// Default directory holding the subcommand modules, relative to the manifest
pub const DEFAULT_COMMANDS_DIR: &str = "commands";

/// Root manifest model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Program the completion handler is registered for
    pub program: String,

    /// Program description, used in the script header
    #[serde(default)]
    pub description: String,

    /// Directory holding `<command>/<subcommand>` module files
    #[serde(default = "default_commands_dir")]
    pub commands_dir: String,

    /// Dynamic profile completion (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileLookup>,

    /// Top-level commands, in completion order
    #[serde(default)]
    pub commands: Vec<CommandDescriptor>,
}

/// A top-level command as listed in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Command name (first word after the program name)
    pub name: String,

    /// Short description of the command
    #[serde(default)]
    pub description: String,
}

/// Profile-selection completion settings
///
/// When the previous word is `flag` and `tool` is installed, candidates are
/// the keys of the JSON object stored in `store`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLookup {
    /// Flag whose value is a profile name
    #[serde(default = "default_profile_flag")]
    pub flag: String,

    /// JSON lookup tool that must be on `PATH`
    #[serde(default = "default_profile_tool")]
    pub tool: String,

    /// Path of the JSON profile store, read at completion time
    #[serde(default = "default_profile_store")]
    pub store: String,
}

fn default_commands_dir() -> String {
    DEFAULT_COMMANDS_DIR.to_string()
}

fn default_profile_flag() -> String {
    "--profile".to_string()
}

fn default_profile_tool() -> String {
    "jq".to_string()
}

fn default_profile_store() -> String {
    "~/.symbolrc.json".to_string()
}

impl Default for ProfileLookup {
    fn default() -> Self {
        Self {
            flag: default_profile_flag(),
            tool: default_profile_tool(),
            store: default_profile_store(),
        }
    }
}

impl CommandDescriptor {
    /// Create a new command descriptor
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Manifest {
    /// Create a new manifest for the given program, without commands
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            description: String::new(),
            commands_dir: default_commands_dir(),
            profile: Some(ProfileLookup::default()),
            commands: Vec::new(),
        }
    }

    /// Add a top-level command
    pub fn with_command(mut self, command: CommandDescriptor) -> Self {
        self.commands.push(command);
        self
    }

    /// Description used in the script header, falling back to the program name
    pub fn display_description(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.program
        } else {
            &self.description
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new("symbol-cli")
    }
}
