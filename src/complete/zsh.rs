//! zsh completion generation
//!
//! Output is destined for `_arguments`; see zshcompsys(1) for the optspec
//! grammar.

use crate::complete::classify::{classify, Capabilities, Classified};
use crate::complete::escape::{describe, describe_param, escape_zsh_double_quoted};
use crate::complete::indented;
use crate::manifest::{Node, Param};
use std::collections::BTreeMap;

/// Generate the completion code for a command or group
pub fn zsh_generate_completions<C: Capabilities + ?Sized>(name: &str, obj: &C) -> Vec<String> {
    match classify(obj) {
        Classified::Group {
            params, commands, ..
        } => zsh_generate_group_completions(name, params, commands),
        Classified::Command { params, .. } => vec![zsh_generate_command_completions(params)],
        Classified::Unrecognized => Vec::new(),
    }
}

/// `_arguments` call for a leaf command
fn zsh_generate_command_completions(params: &[Param]) -> String {
    join_nonempty(&["_arguments -S", zsh_generate_optionspecs(params).as_str()])
}

/// Dispatch block for a group: complete its subcommands, then recurse into
/// whichever one was chosen
fn zsh_generate_group_completions(
    name: &str,
    params: &[Param],
    commands: &BTreeMap<String, Node>,
) -> Vec<String> {
    let arguments = join_nonempty(&[
        "_arguments -S -C",
        format!("\"*:: :->{}_subcommand\"", name).as_str(),
        zsh_gen_subcommand_arguments(commands).as_str(),
        zsh_generate_optionspecs(params).as_str(),
    ]);

    let mut lines = vec![
        format!("# generate_group_completions for {}", name),
        arguments,
        format!("if [[ $state == {}_subcommand ]]", name),
        "then".to_string(),
        "case ${line[1]} in".to_string(),
    ];

    for (sub_name, command) in commands {
        lines.extend(indented(1, [format!("{} )", sub_name)]));
        lines.extend(indented(2, zsh_generate_completions(sub_name, command)));
        lines.extend(indented(1, [";;".to_string()]));
    }

    lines.extend(indented(1, ["* )".to_string()]));
    lines.extend(indented(2, ["_message \"No known completions\"".to_string()]));
    lines.extend(indented(1, [";;".to_string()]));
    lines.push("esac".to_string());
    lines.push("fi".to_string());
    lines
}

/// The first-positional spec listing a group's subcommands with descriptions
fn zsh_gen_subcommand_arguments(commands: &BTreeMap<String, Node>) -> String {
    let entries: Vec<String> = commands
        .iter()
        .map(|(name, command)| {
            format!(
                "{}\\:'{}'",
                name,
                escape_zsh_double_quoted(&describe(command, name))
            )
        })
        .collect();

    format!("\": :(({}))\"", entries.join(" "))
}

/// Optspecs for every parameter, options first, then arguments.
///
/// Every spec is a double-quoted word, so descriptions and metavars are
/// escaped for that context.
pub fn zsh_generate_optionspecs(params: &[Param]) -> String {
    let mut results = Vec::new();

    for param in params {
        let Param::Option(opt) = param else {
            continue;
        };
        let desc = escape_zsh_double_quoted(&describe_param(param));
        for invocation in param.opts() {
            // The value slot carries only the option's name, never its description.
            let value_slot = if opt.takes_value {
                format!(":{}:", invocation.trim_start_matches('-'))
            } else {
                String::new()
            };
            results.push(format!(
                "\"{}{}[{}]{}\"",
                if opt.multiple { "*" } else { "" },
                invocation,
                desc,
                value_slot
            ));
        }
    }

    for param in params.iter().filter(|param| param.as_option().is_none()) {
        let metavar = escape_zsh_double_quoted(&param.make_metavar().replace('\'', ""));
        for name in param.opts() {
            results.push(format!("\": : _message '{} = {}'\"", name, metavar));
        }
    }

    results.join(" ")
}

fn join_nonempty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
