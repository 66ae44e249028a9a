//! Flag-token rendering for option lists

use shellcase_core::OptionSpec;

/// Render one option as its completion tokens.
///
/// `--{key}`, `-{flag}`, both separated by a space (key first), or an empty
/// string when the option has neither.
pub fn render_option(option: &OptionSpec) -> String {
    let key = option.key.as_ref().map(|k| format!("--{}", k));
    let flag = option.flag.as_ref().map(|f| format!("-{}", f));

    key.into_iter().chain(flag).collect::<Vec<_>>().join(" ")
}

/// Render an option list as a single space-separated candidate string.
///
/// Anonymous options are skipped so no empty candidate or stray separator is
/// produced.
pub fn render_options(options: &[OptionSpec]) -> String {
    options
        .iter()
        .filter(|o| !o.is_anonymous())
        .map(render_option)
        .collect::<Vec<_>>()
        .join(" ")
}
