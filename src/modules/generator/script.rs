//! Bash completion script generation
//!
//! The script dispatches on `${words[1]}` (top-level command) and then on
//! `${words[2]}` (subcommand). Unknown words fall through to a default case
//! listing every name at that level; prefix filtering is left to `compgen`.

use shellcase_core::{CommandNode, CommandTree, Manifest, ProfileLookup};

use crate::options::render_options;

/// Settings for the fixed parts of the script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSettings {
    /// Program the completion function is registered for
    pub program: String,

    /// Program description for the header comment
    pub description: String,

    /// Dynamic profile completion, emitted before the static dispatch
    pub profile: Option<ProfileLookup>,
}

impl ScriptSettings {
    /// Create settings for a program, with the default profile lookup
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            description: program.clone(),
            program,
            profile: Some(ProfileLookup::default()),
        }
    }

    /// Build settings from a manifest
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            program: manifest.program.clone(),
            description: manifest.display_description().to_string(),
            profile: manifest.profile.clone(),
        }
    }

    /// Set the header description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set or disable the profile lookup
    pub fn with_profile(mut self, profile: Option<ProfileLookup>) -> Self {
        self.profile = profile;
        self
    }

    /// Name of the generated script file
    pub fn script_name(&self) -> String {
        format!("{}-completion.bash", self.program)
    }

    /// Name of the generated shell function
    pub fn function_name(&self) -> String {
        format!("__{}-completion", self.program)
    }
}

/// Completion script generator
///
/// Generation is pure: the same tree and settings always produce the same
/// text. Tokens are inserted verbatim and must already be shell-safe.
pub struct ScriptGenerator {
    settings: ScriptSettings,
}

impl ScriptGenerator {
    /// Create a new generator
    pub fn new(settings: ScriptSettings) -> Self {
        Self { settings }
    }

    /// Generate the full completion script for a tree
    pub fn generate(&self, tree: &CommandTree) -> String {
        let mut script = self.preamble();
        script.push_str(&self.dispatch(tree));
        script.push_str(&self.postamble());
        script
    }

    /// Header comment, function opening and the profile lookup
    fn preamble(&self) -> String {
        let script_name = self.settings.script_name();
        let program = &self.settings.program;
        // A newline would end the comment line
        let description = self
            .settings
            .description
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        let mut preamble = format!(
            r#"### begin {script_name} ###
#
# {description} completion script for bash
#
# Installation: cat {script_name} >> ~/.bashrc
# Or, maybe: mv {script_name} /etc/bash_completion.d/{program}
#
{function}() {{
    local cmds cur prev words cword split
    _init_completion || return
"#,
            script_name = script_name,
            description = description,
            program = program,
            function = self.settings.function_name(),
        );

        if let Some(profile) = &self.settings.profile {
            preamble.push_str(&format!(
                r#"
    if [ -x "$(command -v {tool})" ] && [ "$prev" = "{flag}" ]; then
        cmds=$(cat {store} | {tool} -r 'keys | join(" ")')
        COMPREPLY=( $(compgen -W "$cmds" -- "$cur") )
        return
    fi
"#,
                tool = profile.tool,
                flag = profile.flag,
                store = profile.store,
            ));
        }

        preamble
    }

    /// Two-level `case` dispatch on the first and second words
    fn dispatch(&self, tree: &CommandTree) -> String {
        let mut block = String::from("\n    case ${words[1]} in\n");

        for command in &tree.children {
            block.push_str(&Self::command_case(command));
        }

        block.push_str(&format!(
            "        *)\n            cmds=\"{}\"\n        ;;\n    esac\n",
            tree.command_names().join(" ")
        ));
        block
    }

    /// Case arm of one top-level command, with its subcommand dispatch
    fn command_case(command: &CommandNode) -> String {
        let mut arm = format!(
            "        {})\n            case ${{words[2]}} in\n",
            command.name
        );

        // Deeper children are not part of the dispatch
        for sub in &command.children {
            arm.push_str(&format!(
                "                {})\n                    cmds=\"{}\"\n                ;;\n",
                sub.name,
                render_options(&sub.options)
            ));
        }

        arm.push_str(&format!(
            "                *)\n                    cmds=\"{}\"\n                ;;\n            esac\n        ;;\n",
            command.child_names().join(" ")
        ));
        arm
    }

    /// Candidate filtering and registration with `complete`
    fn postamble(&self) -> String {
        format!(
            r#"    COMPREPLY=( $(compgen -W "$cmds" -- "$cur") )
}}

complete -o default -F {function} {program}
### end {script_name} ###
"#,
            function = self.settings.function_name(),
            program = self.settings.program,
            script_name = self.settings.script_name(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shellcase_core::OptionSpec;

    fn account() -> CommandNode {
        CommandNode::new("account", "Get account related information")
            .with_child(
                CommandNode::new("generate", "Generate new accounts")
                    .with_option(OptionSpec::long("hd"))
                    .with_option(OptionSpec::long("url").with_flag("u")),
            )
            .unwrap()
            .with_child(
                CommandNode::new("info", "Get account information")
                    .with_option(OptionSpec::long("profile")),
            )
            .unwrap()
    }

    fn generator() -> ScriptGenerator {
        ScriptGenerator::new(ScriptSettings::new("symbol-cli").with_description("Symbol CLI"))
    }

    #[test]
    fn test_generate_account_script() {
        let tree = CommandTree::from_nodes(vec![account()]).unwrap();
        let script = generator().generate(&tree);

        let expected = r#"### begin symbol-cli-completion.bash ###
#
# Symbol CLI completion script for bash
#
# Installation: cat symbol-cli-completion.bash >> ~/.bashrc
# Or, maybe: mv symbol-cli-completion.bash /etc/bash_completion.d/symbol-cli
#
__symbol-cli-completion() {
    local cmds cur prev words cword split
    _init_completion || return

    if [ -x "$(command -v jq)" ] && [ "$prev" = "--profile" ]; then
        cmds=$(cat ~/.symbolrc.json | jq -r 'keys | join(" ")')
        COMPREPLY=( $(compgen -W "$cmds" -- "$cur") )
        return
    fi

    case ${words[1]} in
        account)
            case ${words[2]} in
                generate)
                    cmds="--hd --url -u"
                ;;
                info)
                    cmds="--profile"
                ;;
                *)
                    cmds="generate info"
                ;;
            esac
        ;;
        *)
            cmds="account"
        ;;
    esac
    COMPREPLY=( $(compgen -W "$cmds" -- "$cur") )
}

complete -o default -F __symbol-cli-completion symbol-cli
### end symbol-cli-completion.bash ###
"#;
        assert_eq!(script, expected);
    }

    #[test]
    fn test_generate_empty_tree() {
        let script = generator().generate(&CommandTree::new());
        assert!(script.contains(
            "    case ${words[1]} in\n        *)\n            cmds=\"\"\n        ;;\n    esac\n"
        ));
        assert!(!script.contains("case ${words[2]} in"));
        assert!(script.ends_with("complete -o default -F __symbol-cli-completion symbol-cli\n### end symbol-cli-completion.bash ###\n"));
    }

    #[test]
    fn test_outer_default_lists_commands_in_tree_order() {
        let tree = CommandTree::from_nodes(vec![
            CommandNode::new("transaction", ""),
            account(),
            CommandNode::new("block", ""),
        ])
        .unwrap();
        let script = generator().generate(&tree);
        assert!(script.contains(
            "        *)\n            cmds=\"transaction account block\"\n        ;;\n    esac\n"
        ));
        // Commands without subcommands still get an inner switch
        assert!(script.contains(
            "        block)\n            case ${words[2]} in\n                *)\n                    cmds=\"\"\n"
        ));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let tree = CommandTree::from_nodes(vec![account(), CommandNode::new("block", "")]).unwrap();
        let first = generator().generate(&tree);
        let second = generator().generate(&tree.clone());
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_without_profile() {
        let generator =
            ScriptGenerator::new(ScriptSettings::new("symbol-cli").with_profile(None));
        let script = generator.generate(&CommandTree::new());
        assert!(!script.contains("command -v"));
        assert!(script.contains("    _init_completion || return\n\n    case ${words[1]} in\n"));
    }

    #[test]
    fn test_generate_custom_profile() {
        let settings = ScriptSettings::new("nem").with_profile(Some(ProfileLookup {
            flag: "-p".to_string(),
            tool: "gojq".to_string(),
            store: "~/.nem/profiles.json".to_string(),
        }));
        let script = ScriptGenerator::new(settings).generate(&CommandTree::new());
        assert!(script.contains(r#"if [ -x "$(command -v gojq)" ] && [ "$prev" = "-p" ]; then"#));
        assert!(script.contains(r#"cmds=$(cat ~/.nem/profiles.json | gojq -r 'keys | join(" ")')"#));
        assert!(script.contains("complete -o default -F __nem-completion nem\n"));
    }

    #[test]
    fn test_deeper_levels_are_not_descended() {
        let mut generate = CommandNode::new("generate", "").with_option(OptionSpec::long("hd"));
        generate.push_child(CommandNode::new("nested", "")).unwrap();
        let command = CommandNode::new("account", "").with_child(generate).unwrap();
        let tree = CommandTree::from_nodes(vec![command]).unwrap();

        let script = generator().generate(&tree);
        assert!(!script.contains("nested"));
        assert!(!script.contains("words[3]"));
        assert!(script.contains("                generate)\n                    cmds=\"--hd\"\n"));
    }

    #[test]
    fn test_header_description_single_line() {
        let settings = ScriptSettings::new("symbol-cli").with_description("Symbol\nCLI  tool");
        let script = ScriptGenerator::new(settings).generate(&CommandTree::new());
        assert!(script.contains("# Symbol CLI tool completion script for bash\n"));
    }

    #[test]
    fn test_settings_from_manifest() {
        let mut manifest = Manifest::new("symbol-cli");
        manifest.profile = None;
        let settings = ScriptSettings::from_manifest(&manifest);
        assert_eq!(settings.description, "symbol-cli");
        assert!(settings.profile.is_none());
        assert_eq!(settings.script_name(), "symbol-cli-completion.bash");
        assert_eq!(settings.function_name(), "__symbol-cli-completion");
    }
}
