//! In-memory module registry

use async_trait::async_trait;
use shellcase_core::CompletionError;
use std::collections::BTreeMap;

use super::traits::{ModuleDiscovery, SubcommandModule};

/// Static registry of subcommand modules, keyed by top-level command
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    commands: BTreeMap<String, Vec<SubcommandModule>>,
}

impl StaticRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under a top-level command
    pub fn register(&mut self, command: impl Into<String>, module: SubcommandModule) {
        self.commands.entry(command.into()).or_default().push(module);
    }

    /// Builder variant of [`StaticRegistry::register`]
    pub fn with_module(mut self, command: impl Into<String>, module: SubcommandModule) -> Self {
        self.register(command, module);
        self
    }

    /// Register a top-level command with no subcommands
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.commands.entry(command.into()).or_default();
        self
    }
}

#[async_trait]
impl ModuleDiscovery for StaticRegistry {
    async fn discover(&self, command: &str) -> Result<Vec<SubcommandModule>, CompletionError> {
        let mut modules = self
            .commands
            .get(command)
            .cloned()
            .ok_or_else(|| CompletionError::discovery(command, "not registered"))?;
        modules.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(modules)
    }

    fn source_name(&self) -> &'static str {
        "registry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registry_sorts_modules() {
        let registry = StaticRegistry::new()
            .with_module("account", SubcommandModule::new("info", ""))
            .with_module("account", SubcommandModule::new("generate", ""));
        let modules = registry.discover("account").await.unwrap();
        let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["generate", "info"]);
    }

    #[tokio::test]
    async fn test_registry_unknown_command() {
        let registry = StaticRegistry::new().with_command("block");
        assert!(registry.discover("block").await.unwrap().is_empty());
        assert!(matches!(
            registry.discover("account").await,
            Err(CompletionError::Discovery { .. })
        ));
    }
}
