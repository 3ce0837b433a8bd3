//! Script wrapping and output
//!
//! Each dialect's generated code is wrapped in the boilerplate its shell needs
//! and written below an output directory:
//!
//! - `zsh/_<name>`
//! - `bash/<name>.bash`
//! - `fish/<name>.fish`
//!
//! Existing files are overwritten.

use crate::complete::bash::bash_generate_completions;
use crate::complete::classify::Capabilities;
use crate::complete::fish::fish_generate_completions;
use crate::complete::indented;
use crate::complete::zsh::zsh_generate_completions;
use crate::error::TabtabError;
use clap::ValueEnum;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Supported completion dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Shell {
    Zsh,
    Bash,
    Fish,
}

impl Shell {
    /// All dialects, in generation order
    pub const ALL: [Shell; 3] = [Shell::Zsh, Shell::Fish, Shell::Bash];

    /// Directory the dialect's scripts are written to
    pub fn dir_name(self) -> &'static str {
        match self {
            Shell::Zsh => "zsh",
            Shell::Bash => "bash",
            Shell::Fish => "fish",
        }
    }

    /// File name of the script for an entry point
    pub fn file_name(self, name: &str) -> String {
        match self {
            Shell::Zsh => format!("_{}", name),
            Shell::Bash => format!("{}.bash", name),
            Shell::Fish => format!("{}.fish", name),
        }
    }

    /// Path of the script for an entry point, relative to `out_dir`
    pub fn script_path(self, out_dir: &Path, name: &str) -> PathBuf {
        out_dir.join(self.dir_name()).join(self.file_name(name))
    }

    /// Render the complete script for an entry point
    pub fn render<C: Capabilities + ?Sized>(self, name: &str, obj: &C) -> String {
        match self {
            Shell::Zsh => render_zsh_script(name, obj),
            Shell::Bash => render_bash_script(name, obj),
            Shell::Fish => render_fish_script(name, obj),
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Full zsh script: a `_<name>` function registered with `compdef`.
///
/// Autoloaded from `fpath`, the file body runs as `_<name>` and completes
/// on the first call; sourced, it falls through to `compdef`.
pub fn render_zsh_script<C: Capabilities + ?Sized>(name: &str, obj: &C) -> String {
    let mut lines = vec![
        format!("#compdef {}", name),
        String::new(),
        format!("_{}() {{", name),
        "    typeset -A opt_args".to_string(),
        "    local context state line curcontext=\"$curcontext\"".to_string(),
        String::new(),
    ];
    lines.extend(indented(1, zsh_generate_completions(name, obj)));
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push(format!("if [[ \"$funcstack[1]\" == \"_{}\" ]]; then", name));
    lines.push(format!("    _{} \"$@\"", name));
    lines.push("    return".to_string());
    lines.push("fi".to_string());
    lines.push(format!("compdef _{} {}", name, name));
    finish(lines)
}

/// Full bash script: a `_<name>` function registered with `complete -F`.
///
/// The preamble fills `line` with the non-option words between the program
/// name and the word under the cursor.
pub fn render_bash_script<C: Capabilities + ?Sized>(name: &str, obj: &C) -> String {
    let mut lines = vec![
        format!("_{}() {{", name),
        "    local cur prev word".to_string(),
        "    local -a line".to_string(),
        String::new(),
        "    cur=\"${COMP_WORDS[COMP_CWORD]}\"".to_string(),
        "    prev=\"${COMP_WORDS[COMP_CWORD-1]}\"".to_string(),
        "    line=()".to_string(),
        "    for word in \"${COMP_WORDS[@]:1:COMP_CWORD-1}\"; do".to_string(),
        "        [[ $word == -* ]] || line+=(\"$word\")".to_string(),
        "    done".to_string(),
        String::new(),
    ];
    lines.extend(indented(1, bash_generate_completions(obj)));
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push(format!("complete -F _{} {}", name, name));
    finish(lines)
}

/// Full fish script: the `complete` statements, no wrapper
pub fn render_fish_script<C: Capabilities + ?Sized>(name: &str, obj: &C) -> String {
    finish(fish_generate_completions(obj, name, name))
}

fn finish(lines: Vec<String>) -> String {
    let mut script = lines.join("\n");
    script.push('\n');
    script
}

/// Write the zsh script for an entry point
pub fn write_zsh_completions<C: Capabilities + ?Sized>(
    out_dir: &Path,
    name: &str,
    obj: &C,
) -> Result<PathBuf, TabtabError> {
    write_completions(Shell::Zsh, out_dir, name, obj)
}

/// Write the bash script for an entry point
pub fn write_bash_completions<C: Capabilities + ?Sized>(
    out_dir: &Path,
    name: &str,
    obj: &C,
) -> Result<PathBuf, TabtabError> {
    write_completions(Shell::Bash, out_dir, name, obj)
}

/// Write the fish script for an entry point
pub fn write_fish_completions<C: Capabilities + ?Sized>(
    out_dir: &Path,
    name: &str,
    obj: &C,
) -> Result<PathBuf, TabtabError> {
    write_completions(Shell::Fish, out_dir, name, obj)
}

/// Render and write one dialect's script, creating its directory if needed
pub fn write_completions<C: Capabilities + ?Sized>(
    shell: Shell,
    out_dir: &Path,
    name: &str,
    obj: &C,
) -> Result<PathBuf, TabtabError> {
    let dir = out_dir.join(shell.dir_name());
    fs::create_dir_all(&dir).map_err(|source| TabtabError::Write {
        path: dir.clone(),
        source,
    })?;

    let path = shell.script_path(out_dir, name);
    fs::write(&path, shell.render(name, obj)).map_err(|source| TabtabError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Write the scripts for every selected dialect, returning the written paths
pub fn generate_completions<C: Capabilities + ?Sized>(
    out_dir: &Path,
    name: &str,
    obj: &C,
    shells: &[Shell],
) -> Result<Vec<PathBuf>, TabtabError> {
    shells
        .iter()
        .map(|shell| write_completions(*shell, out_dir, name, obj))
        .collect()
}
