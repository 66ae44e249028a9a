//! Command-tree loading for Shellcase
//!
//! This crate discovers the subcommand modules of every top-level command and
//! builds the command tree consumed by the script generator.

pub mod discovery;
pub mod loader;

pub use discovery::{FsDiscovery, ModuleDiscovery, StaticRegistry, SubcommandModule};
pub use loader::{CommandFailure, CommandLoader, LoadOutcome, LoadReport};

use shellcase_core::Manifest;
use std::path::Path;
use std::sync::Arc;

/// Load the tree of a manifest whose `commands_dir` is relative to `base_dir`
pub async fn load_manifest(manifest: &Manifest, base_dir: impl AsRef<Path>) -> LoadOutcome {
    let root = base_dir.as_ref().join(&manifest.commands_dir);
    let loader = CommandLoader::new(Arc::new(FsDiscovery::new(root)));
    loader.load(&manifest.commands).await
}
