//! fish completion generation
//!
//! fish has no dispatch function; each node becomes a series of independent
//! `complete` statements guarded by a condition on the subcommands already
//! typed.

use crate::complete::classify::{classify, Capabilities, Classified};
use crate::complete::escape::{
    describe, describe_param, escape_fish_double_quoted, escape_fish_single_quoted,
};
use crate::manifest::Param;

/// Generate `complete` statements for a command or group.
///
/// `cmdname` is the subcommand the statements are anchored on and `topname`
/// the program being completed; they are equal at the top level.
pub fn fish_generate_completions<C: Capabilities + ?Sized>(
    obj: &C,
    cmdname: &str,
    topname: &str,
) -> Vec<String> {
    let condition = if cmdname != topname {
        format!("__fish_seen_subcommand_from {}", cmdname)
    } else {
        "__fish_use_subcommand".to_string()
    };
    let prefix = format!("complete -c {} -n '{}'", topname, condition);

    let mut result = Vec::new();
    match classify(obj) {
        Classified::Group {
            params, commands, ..
        } => {
            result.extend(option_statements(&prefix, params));
            for (name, command) in commands {
                result.push(format!(
                    "{} -xa '{}' -d '{}'",
                    prefix,
                    name,
                    escape_fish_single_quoted(&describe(command, name))
                ));
                result.extend(fish_generate_completions(command, name, topname));
            }
        }
        Classified::Command { params, .. } => {
            result.extend(option_statements(&prefix, params));
        }
        Classified::Unrecognized => {}
    }
    result
}

fn option_statements<'a>(prefix: &'a str, params: &'a [Param]) -> impl Iterator<Item = String> + 'a {
    params
        .iter()
        .flat_map(fish_generate_options)
        .map(move |flags| format!("{} {}", prefix, flags))
}

/// Arguments to fish's `complete` builtin for a parameter, one entry per
/// invocation string. Arguments produce nothing.
pub fn fish_generate_options(param: &Param) -> Vec<String> {
    if param.as_option().is_none() {
        return Vec::new();
    }

    let desc = escape_fish_double_quoted(&describe_param(param));

    param
        .opts()
        .iter()
        .map(|invocation| {
            let flag = if let Some(long) = invocation.strip_prefix("--") {
                format!("-l {}", long)
            } else {
                let short = invocation.trim_start_matches('-');
                if short.chars().count() == 1 {
                    format!("-s {}", short)
                } else {
                    format!("-o {}", short)
                }
            };
            if desc.is_empty() {
                flag
            } else {
                format!("{} -d \"{}\"", flag, desc)
            }
        })
        .collect()
}
