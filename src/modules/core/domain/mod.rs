//! Domain models for completion generation

mod manifest;
mod option;
mod tree;

pub use manifest::{CommandDescriptor, Manifest, ProfileLookup, DEFAULT_COMMANDS_DIR};
pub use option::OptionSpec;
pub use tree::{CommandNode, CommandTree};
