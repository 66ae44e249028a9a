//! Manifest and command tree validation
//!
//! Every token that ends up in the generated script is inserted verbatim, so
//! names, option keys and flags are checked here once, before generation.

use once_cell::sync::Lazy;
use regex::Regex;
use shellcase_core::{CommandNode, CompletionError, Manifest, ProfileLookup};
use std::collections::HashSet;

/// Shell-safe token: alphanumeric start, then alphanumerics, `-` or `_`
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap());

/// Profile flag as typed on the command line (`--profile`, `-p`)
static FLAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^--?[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap());

/// Unquoted path, `~` allowed so the shell still expands it
static STORE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_./~-]+$").unwrap());

/// Returns true if `token` can be inserted into the script without quoting
pub fn is_shell_token(token: &str) -> bool {
    TOKEN_PATTERN.is_match(token)
}

/// Manifest validator
pub struct ManifestValidator;

impl ManifestValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validate the manifest settings shared by every command.
    ///
    /// Command names are checked per command by the loader, so one bad entry
    /// only drops that command.
    pub fn validate(&self, manifest: &Manifest) -> Result<(), CompletionError> {
        self.validate_token("program name", &manifest.program)?;
        if manifest.commands_dir.trim().is_empty() {
            return Err(CompletionError::Validation(
                "commands_dir cannot be empty".to_string(),
            ));
        }
        if let Some(profile) = &manifest.profile {
            self.validate_profile(profile)?;
        }
        Ok(())
    }

    /// Validate the profile lookup settings
    fn validate_profile(&self, profile: &ProfileLookup) -> Result<(), CompletionError> {
        if !FLAG_PATTERN.is_match(&profile.flag) {
            return Err(CompletionError::Validation(format!(
                "Invalid profile flag '{}': expected '--name' or '-n'",
                profile.flag
            )));
        }
        self.validate_token("profile tool", &profile.tool)?;
        if !STORE_PATTERN.is_match(&profile.store) {
            return Err(CompletionError::Validation(format!(
                "Invalid profile store path '{}'",
                profile.store
            )));
        }
        Ok(())
    }

    /// Validate a top-level command name before its modules are looked up
    pub fn validate_command_name(&self, name: &str) -> Result<(), CompletionError> {
        self.validate_token("command name", name)
    }

    /// Validate a loaded top-level command with its subcommands and options
    pub fn validate_command(&self, command: &CommandNode) -> Result<(), CompletionError> {
        self.validate_command_name(&command.name)?;

        let mut names = HashSet::new();
        for sub in &command.children {
            self.validate_token(&format!("subcommand name in '{}'", command.name), &sub.name)?;

            if !names.insert(sub.name.as_str()) {
                return Err(CompletionError::DuplicateName {
                    scope: format!("command '{}'", command.name),
                    name: sub.name.clone(),
                });
            }

            for option in &sub.options {
                for token in option.tokens() {
                    self.validate_token(
                        &format!("option of '{} {}'", command.name, sub.name),
                        token,
                    )?;
                }
            }
        }

        Ok(())
    }

    fn validate_token(&self, what: &str, token: &str) -> Result<(), CompletionError> {
        if token.is_empty() {
            return Err(CompletionError::Validation(format!("Empty {}", what)));
        }

        if !is_shell_token(token) {
            return Err(CompletionError::Validation(format!(
                "Invalid {} '{}': only letters, digits, '-' and '_' are allowed",
                what, token
            )));
        }

        Ok(())
    }
}

impl Default for ManifestValidator {
    fn default() -> Self {
        Self::new()
    }
}
