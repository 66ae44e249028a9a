//! Error types for Shellcase

use thiserror::Error;

/// Main error type for Shellcase operations
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Manifest file reading or parsing error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Manifest or token validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Subcommand modules of a top-level command could not be located
    #[error("Discovery failed for command '{command}': {reason}")]
    Discovery { command: String, reason: String },

    /// A module was found but its metadata could not be read
    #[error("Failed to load module '{command} {module}': {reason}")]
    Load {
        command: String,
        module: String,
        reason: String,
    },

    /// Two siblings in the command tree share a name
    #[error("Duplicate name '{name}' in {scope}")]
    DuplicateName { scope: String, name: String },

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CompletionError {
    /// Create a discovery error for the given top-level command
    pub fn discovery(command: impl Into<String>, reason: impl ToString) -> Self {
        Self::Discovery {
            command: command.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a load error for one module of a top-level command
    pub fn load(
        command: impl Into<String>,
        module: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::Load {
            command: command.into(),
            module: module.into(),
            reason: reason.to_string(),
        }
    }

    /// Short machine-friendly label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::Config(_) => "config",
            CompletionError::Validation(_) => "validation",
            CompletionError::Discovery { .. } => "discovery",
            CompletionError::Load { .. } => "load",
            CompletionError::DuplicateName { .. } => "duplicate_name",
            CompletionError::Io(_) => "io",
            CompletionError::Json(_) => "json",
            CompletionError::Internal(_) => "internal",
        }
    }
}

/// Result type alias using CompletionError
pub type Result<T> = std::result::Result<T, CompletionError>;
