//! Subcommand module parser
//!
//! Module files carry a description and an ordered option list. Parsing is
//! lenient: anything that is syntactically valid YAML yields a module, with
//! malformed metadata normalized away.

use serde_yaml::Value;
use shellcase_core::{CompletionError, OptionSpec};

/// Metadata read from one subcommand module file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleMetadata {
    /// Subcommand description, empty when missing
    pub description: String,

    /// Declared options in file order
    pub options: Vec<OptionSpec>,
}

/// Parser for subcommand module files
pub struct ModuleParser;

impl ModuleParser {
    /// Parse module metadata from a YAML or JSON string
    ///
    /// Only a syntax error is reported; a missing `description` becomes empty,
    /// a missing or non-list `options` becomes no options, and option entries
    /// that are not mappings are skipped.
    pub fn parse(content: &str) -> Result<ModuleMetadata, CompletionError> {
        let value: Value = serde_yaml::from_str(content)
            .map_err(|e| CompletionError::Config(format!("YAML parse error: {}", e)))?;
        Ok(Self::from_value(&value))
    }

    /// Normalize an already parsed document
    pub fn from_value(value: &Value) -> ModuleMetadata {
        let description = value
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let options = value
            .get("options")
            .or_else(|| value.get("optionDefinitions"))
            .and_then(Value::as_sequence)
            .map(|entries| entries.iter().filter_map(option_from_value).collect())
            .unwrap_or_default();

        ModuleMetadata {
            description,
            options,
        }
    }
}

fn option_from_value(value: &Value) -> Option<OptionSpec> {
    if !value.is_mapping() {
        return None;
    }
    Some(OptionSpec {
        key: string_field(value, "key"),
        flag: string_field(value, "flag"),
        description: string_field(value, "description").or_else(|| string_field(value, "desc")),
    })
}

fn string_field(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
