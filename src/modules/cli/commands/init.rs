//! Init command implementation

use clap::Args;
use shellcase_core::{CompletionError, DEFAULT_COMMANDS_DIR};
use shellcase_parser::is_shell_token;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Init command arguments
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Program to generate completions for
    #[arg(default_value = "my-cli")]
    pub program: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command
    pub async fn execute(&self) -> Result<(), CompletionError> {
        if !is_shell_token(&self.program) {
            return Err(CompletionError::Validation(format!(
                "Invalid program name '{}': only letters, digits, '-' and '_' are allowed",
                self.program
            )));
        }

        info!("Initializing completion manifest for: {}", self.program);

        let output_dir = Path::new(&self.output);
        let module_dir = output_dir.join(DEFAULT_COMMANDS_DIR).join("account");
        fs::create_dir_all(&module_dir)?;

        self.write_file(&output_dir.join("completion.yaml"), &self.generate_manifest())?;
        self.write_file(&module_dir.join("info.yaml"), &Self::generate_info_module())?;
        self.write_file(
            &module_dir.join("generate.yaml"),
            &Self::generate_generate_module(),
        )?;

        // Instructions go to stderr so stdout stays clean for scripts
        eprintln!("\n✨ Completion manifest initialized!");
        eprintln!("\nNext steps:");
        eprintln!("  1. List your top-level commands in completion.yaml");
        eprintln!("  2. Add one module file per subcommand under commands/<command>/");
        eprintln!(
            "  3. Run: shellcase bash -f completion.yaml > {}-completion.bash",
            self.program
        );

        Ok(())
    }

    /// Write a file unless it exists and `--force` is not set
    fn write_file(&self, path: &Path, content: &str) -> Result<(), CompletionError> {
        if path.exists() && !self.force {
            warn!("Skipping existing file: {}", path.display());
            return Ok(());
        }
        fs::write(path, content)?;
        info!("Created: {}", path.display());
        Ok(())
    }

    /// Generate manifest content
    fn generate_manifest(&self) -> String {
        format!(
            r#"# Shellcase completion manifest
# Each command lists its subcommands as module files in commands/<command>/

program: {program}
description: {program}
commands_dir: {commands_dir}

# Complete profile names from a JSON store after the profile flag.
# Set `profile: false` to disable.
profile:
  flag: --profile
  tool: jq
  store: ~/.{program}rc.json

commands:
  - name: account
    description: Get account related information
"#,
            program = self.program,
            commands_dir = DEFAULT_COMMANDS_DIR,
        )
    }

    /// Example module without options
    fn generate_info_module() -> String {
        r#"description: Get account information
options:
  - key: profile
    description: (Optional) Select between your profiles, by providing a profile name.
"#
        .to_string()
    }

    /// Example module with long and short options
    fn generate_generate_module() -> String {
        r#"description: Generate new accounts
options:
  - key: hd
    description: (Optional) Create an HD wallet.
  - key: url
    flag: u
    description: (Optional) When saving profile, provide a node URL.
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shellcase_parser::{parse_string, ModuleParser};

    fn command(output: &str) -> InitCommand {
        InitCommand {
            program: "symbol-cli".to_string(),
            output: output.to_string(),
            force: false,
        }
    }

    #[test]
    fn test_generated_manifest_parses() {
        let manifest = parse_string(&command(".").generate_manifest()).unwrap();
        assert_eq!(manifest.program, "symbol-cli");
        assert_eq!(manifest.commands[0].name, "account");
        assert_eq!(manifest.profile.unwrap().store, "~/.symbol-clirc.json");
    }

    #[test]
    fn test_generated_modules_parse() {
        let info = ModuleParser::parse(&InitCommand::generate_info_module()).unwrap();
        assert_eq!(info.options.len(), 1);
        let generate = ModuleParser::parse(&InitCommand::generate_generate_module()).unwrap();
        assert_eq!(generate.options[1].flag.as_deref(), Some("u"));
    }

    #[tokio::test]
    async fn test_init_writes_files_and_keeps_existing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        std::fs::write(dir.path().join("completion.yaml"), "program: keep-me\n").unwrap();

        command(out).execute().await.unwrap();

        assert!(dir.path().join("commands/account/info.yaml").exists());
        assert!(dir.path().join("commands/account/generate.yaml").exists());
        let manifest = std::fs::read_to_string(dir.path().join("completion.yaml")).unwrap();
        assert_eq!(manifest, "program: keep-me\n");
    }

    #[tokio::test]
    async fn test_init_rejects_unsafe_program() {
        let mut cmd = command(".");
        cmd.program = "my cli".to_string();
        assert!(cmd.execute().await.is_err());
    }
}
