//! Manifest and module parsing for Shellcase
//!
//! This crate handles parsing of YAML (or JSON) manifests and subcommand
//! module files, and validation of every token that reaches the script.

pub mod module;
pub mod validator;
pub mod yaml;

pub use module::{ModuleMetadata, ModuleParser};
pub use validator::{is_shell_token, ManifestValidator};
pub use yaml::YamlParser;

use shellcase_core::{CompletionError, Manifest};
use std::path::Path;

/// Parse a manifest file from a path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Manifest, CompletionError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        CompletionError::Config(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    parse_string(&content)
}

/// Parse a manifest from a string
pub fn parse_string(content: &str) -> Result<Manifest, CompletionError> {
    let manifest = YamlParser::parse(content)?;

    let validator = ManifestValidator::new();
    validator.validate(&manifest)?;

    Ok(manifest)
}
