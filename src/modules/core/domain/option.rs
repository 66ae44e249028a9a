//! Option definitions for leaf commands

use serde::{Deserialize, Serialize};

/// One flag accepted by a subcommand
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Long option name, completed as `--{key}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Short option name, completed as `-{flag}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,

    /// Human-readable description of this option
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OptionSpec {
    /// Create an option with only a long name
    pub fn long(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Create an option with only a short name
    pub fn short(flag: impl Into<String>) -> Self {
        Self {
            flag: Some(flag.into()),
            ..Self::default()
        }
    }

    /// Set the short name for this option
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    /// Set the description for this option
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true if the option has neither a long nor a short name
    pub fn is_anonymous(&self) -> bool {
        self.key.is_none() && self.flag.is_none()
    }

    /// Iterate over the tokens this option contributes (key first, then flag)
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.key.iter().chain(self.flag.iter()).map(String::as_str)
    }
}
