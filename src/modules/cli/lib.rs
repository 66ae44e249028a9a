//! Shellcase CLI
//!
//! This crate provides the command-line interface for Shellcase including:
//! - bash: Print the bash completion script
//! - tree: Print the resolved command tree as JSON
//! - init: Scaffold a manifest and example modules

pub mod commands;

pub use commands::{Cli, Commands};
