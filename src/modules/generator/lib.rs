//! Bash completion script generation for Shellcase
//!
//! Turns a resolved command tree into the text of a bash completion script.
//! Nothing in this crate performs I/O.

pub mod options;
pub mod script;

pub use options::{render_option, render_options};
pub use script::{ScriptGenerator, ScriptSettings};

use shellcase_core::{CommandTree, Manifest};

/// Generate the completion script for a manifest's program
pub fn generate_script(manifest: &Manifest, tree: &CommandTree) -> String {
    ScriptGenerator::new(ScriptSettings::from_manifest(manifest)).generate(tree)
}
