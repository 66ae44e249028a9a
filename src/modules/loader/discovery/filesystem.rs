//! Filesystem discovery: `<root>/<command>/<subcommand>.<ext>`

use async_trait::async_trait;
use shellcase_core::CompletionError;
use shellcase_parser::ModuleParser;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::traits::{ModuleDiscovery, SubcommandModule};

/// File extensions recognized as subcommand modules
pub const MODULE_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Discovers subcommand modules by scanning one directory per command
pub struct FsDiscovery {
    root: PathBuf,
}

impl FsDiscovery {
    /// Create a discovery rooted at the given commands directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// List module files of a command, sorted by subcommand name
    async fn list_modules(&self, command: &str) -> Result<Vec<(String, PathBuf)>, CompletionError> {
        let dir = self.root.join(command);
        let mut entries = fs::read_dir(&dir)
            .await
            .map_err(|e| CompletionError::discovery(command, format!("{}: {}", dir.display(), e)))?;

        let mut modules = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CompletionError::discovery(command, e))?
        {
            let path = entry.path();
            // Follows symlinks, so linked module files are picked up
            let is_file = fs::metadata(&path)
                .await
                .map(|m| m.is_file())
                .unwrap_or(false);
            if !is_file || !has_module_extension(&path) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            // Hidden files such as editor backups are not subcommands
            if stem.starts_with('.') {
                continue;
            }
            modules.push((stem.to_string(), path));
        }

        modules.sort();

        if let Some(pair) = modules.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(CompletionError::DuplicateName {
                scope: format!("command '{}'", command),
                name: pair[0].0.clone(),
            });
        }

        Ok(modules)
    }
}

fn has_module_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| MODULE_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

#[async_trait]
impl ModuleDiscovery for FsDiscovery {
    async fn discover(&self, command: &str) -> Result<Vec<SubcommandModule>, CompletionError> {
        let modules = self.list_modules(command).await?;
        debug!("Found {} module(s) for '{}'", modules.len(), command);

        let mut loaded = Vec::with_capacity(modules.len());
        for (name, path) in modules {
            let content = fs::read_to_string(&path)
                .await
                .map_err(|e| CompletionError::load(command, name.as_str(), e))?;
            let metadata = ModuleParser::parse(&content)
                .map_err(|e| CompletionError::load(command, name.as_str(), e))?;
            loaded.push(SubcommandModule::from_metadata(name, metadata));
        }

        Ok(loaded)
    }

    fn source_name(&self) -> &'static str {
        "filesystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shellcase_core::OptionSpec;
    use std::fs as std_fs;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std_fs::create_dir_all(path.parent().unwrap()).unwrap();
        std_fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_discover_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "account/info.yaml", "description: Get account information\n");
        write(
            dir.path(),
            "account/generate.yml",
            "description: Generate new accounts\noptions:\n  - key: hd\n  - key: url\n    flag: u\n",
        );
        write(dir.path(), "account/README.md", "not a module");
        std_fs::create_dir_all(dir.path().join("account/nested.yaml")).unwrap();

        let discovery = FsDiscovery::new(dir.path());
        let modules = discovery.discover("account").await.unwrap();

        let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["generate", "info"]);
        assert_eq!(
            modules[0].options,
            vec![OptionSpec::long("hd"), OptionSpec::long("url").with_flag("u")]
        );
        assert!(modules[1].options.is_empty());
    }

    #[tokio::test]
    async fn test_discover_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let discovery = FsDiscovery::new(dir.path());
        let err = discovery.discover("account").await.unwrap_err();
        assert!(matches!(err, CompletionError::Discovery { ref command, .. } if command == "account"));
    }

    #[tokio::test]
    async fn test_discover_broken_module() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "account/info.yaml", "options: [");
        let discovery = FsDiscovery::new(dir.path());
        let err = discovery.discover("account").await.unwrap_err();
        assert!(matches!(err, CompletionError::Load { ref module, .. } if module == "info"));
    }

    #[tokio::test]
    async fn test_discover_rejects_stem_collision() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "account/info.yaml", "description: a\n");
        write(dir.path(), "account/info.json", "{\"description\": \"b\"}");
        let discovery = FsDiscovery::new(dir.path());
        let err = discovery.discover("account").await.unwrap_err();
        assert!(matches!(err, CompletionError::DuplicateName { ref name, .. } if name == "info"));
    }

    #[tokio::test]
    async fn test_discover_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        std_fs::create_dir_all(dir.path().join("account")).unwrap();
        let discovery = FsDiscovery::new(dir.path());
        assert!(discovery.discover("account").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_discover_skips_dotfiles() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "account/info.yaml", "description: a\n");
        write(dir.path(), "account/.info.yaml", "description: backup\n");
        write(dir.path(), "account/.yaml", "description: nameless\n");
        let discovery = FsDiscovery::new(dir.path());
        let modules = discovery.discover("account").await.unwrap();
        let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["info"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_discover_follows_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "shared/generate.yaml", "options:\n  - key: hd\n");
        write(dir.path(), "account/info.yaml", "description: a\n");
        std::os::unix::fs::symlink(
            dir.path().join("shared/generate.yaml"),
            dir.path().join("account/generate.yaml"),
        )
        .unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("shared/missing.yaml"),
            dir.path().join("account/dangling.yaml"),
        )
        .unwrap();

        let discovery = FsDiscovery::new(dir.path());
        let modules = discovery.discover("account").await.unwrap();
        let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["generate", "info"]);
        assert_eq!(modules[0].options, vec![OptionSpec::long("hd")]);
    }
}
