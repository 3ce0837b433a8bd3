//! bash completion generation
//!
//! The emitted code relies on two locals set up by the function preamble in
//! [`crate::complete::emit`]:
//!
//! - `cur`: the word under the cursor.
//! - `line`: the positional (non-dash) words before the cursor, in order.
//!
//! Every group level dispatches on `${line[0]}` and then drops it with
//! `line=("${line[@]:1}")`, so the code generated for a subcommand sees its
//! own positional words starting at index 0, exactly as the top level does.

use crate::complete::classify::{classify, Capabilities, Classified};
use crate::complete::indented;
use crate::manifest::{Node, Param};
use std::collections::BTreeMap;

/// Generate the completion code for a command or group
pub fn bash_generate_completions<C: Capabilities + ?Sized>(obj: &C) -> Vec<String> {
    match classify(obj) {
        Classified::Group {
            params, commands, ..
        } => bash_generate_group_completions(params, commands),
        Classified::Command { params, .. } => vec![compreply(&option_words(params))],
        Classified::Unrecognized => Vec::new(),
    }
}

fn bash_generate_group_completions(
    params: &[Param],
    commands: &BTreeMap<String, Node>,
) -> Vec<String> {
    let mut lines = vec!["case \"${line[0]}\" in".to_string()];

    for (name, command) in commands {
        lines.extend(indented(1, [format!("{} )", name)]));
        lines.extend(indented(2, ["line=(\"${line[@]:1}\")".to_string()]));
        lines.extend(indented(2, bash_generate_completions(command)));
        lines.extend(indented(1, [";;".to_string()]));
    }

    let mut words: Vec<&str> = commands.keys().map(String::as_str).collect();
    words.extend(option_words(params));

    lines.extend(indented(1, ["* )".to_string()]));
    lines.extend(indented(2, [compreply(&words)]));
    lines.extend(indented(1, [";;".to_string()]));
    lines.push("esac".to_string());
    lines
}

/// Invocation strings of every option; arguments are display-only
fn option_words(params: &[Param]) -> Vec<&str> {
    params
        .iter()
        .filter_map(Param::as_option)
        .flat_map(|opt| opt.opts.iter().map(String::as_str))
        .collect()
}

fn compreply(words: &[&str]) -> String {
    format!(
        "COMPREPLY=($(compgen -W \"{}\" -- \"${{cur}}\"))",
        words.join(" ")
    )
}
