//! YAML manifest parser

use serde::Deserialize;
use shellcase_core::{CommandDescriptor, CompletionError, Manifest, ProfileLookup};

/// YAML parser for Shellcase manifests (JSON is accepted too)
pub struct YamlParser;

/// Permissive manifest schema.
///
/// `commands` may be a list of `{ name, description }` entries or a map of
/// `name: description`; `subcommands` with `brief` is accepted as an alias.
#[derive(Debug, Deserialize)]
struct RawManifest {
    program: String,

    #[serde(default)]
    description: Option<String>,

    #[serde(default)]
    commands_dir: Option<String>,

    /// `false` disables the profile branch, a mapping configures it.
    #[serde(default)]
    profile: Option<RawProfile>,

    #[serde(default)]
    commands: Option<RawCommands>,

    /// Alternate field name.
    #[serde(default)]
    subcommands: Option<RawCommands>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawProfile {
    Enabled(bool),
    Settings(ProfileLookup),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCommands {
    List(Vec<RawCommand>),
    Map(serde_yaml::Mapping),
}

#[derive(Debug, Deserialize)]
struct RawCommand {
    name: String,

    #[serde(default)]
    description: Option<String>,

    /// Alternate field name.
    #[serde(default)]
    brief: Option<String>,
}

impl YamlParser {
    /// Parse a manifest from a YAML or JSON string
    pub fn parse(content: &str) -> Result<Manifest, CompletionError> {
        let raw = serde_yaml::from_str::<RawManifest>(content)
            .map_err(|e| CompletionError::Config(format!("YAML parse error: {}", e)))?;
        raw_to_manifest(raw)
    }
}

fn raw_to_manifest(raw: RawManifest) -> Result<Manifest, CompletionError> {
    let commands = match raw.commands.or(raw.subcommands) {
        None => Vec::new(),
        Some(RawCommands::List(list)) => list
            .into_iter()
            .map(|c| {
                let description = c.description.or(c.brief).unwrap_or_default();
                CommandDescriptor::new(c.name, description)
            })
            .collect(),
        Some(RawCommands::Map(map)) => {
            let mut commands = Vec::with_capacity(map.len());
            for (name, description) in map {
                let name = yaml_scalar_to_string(name).ok_or_else(|| {
                    CompletionError::Config("Command names must be scalars".to_string())
                })?;
                let description = yaml_scalar_to_string(description).unwrap_or_default();
                commands.push(CommandDescriptor::new(name, description));
            }
            commands
        }
    };

    let profile = match raw.profile {
        None | Some(RawProfile::Enabled(true)) => Some(ProfileLookup::default()),
        Some(RawProfile::Enabled(false)) => None,
        Some(RawProfile::Settings(settings)) => Some(settings),
    };

    let mut manifest = Manifest::new(raw.program);
    manifest.description = raw.description.unwrap_or_default();
    if let Some(dir) = raw.commands_dir {
        manifest.commands_dir = dir;
    }
    manifest.profile = profile;
    manifest.commands = commands;
    Ok(manifest)
}

fn yaml_scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::Null => None,
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::String(s) => Some(s),
        _ => None,
    }
}
