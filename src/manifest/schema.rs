//! Command tree validation
//!
//! Names and invocation strings end up as bare tokens in generated shell code,
//! so they are checked here before any generator sees them.

use crate::error::{ManifestError, ManifestResult};
use crate::manifest::types::{Node, Param};

/// Characters that would break a bare token in any of the target shells
const FORBIDDEN_CHARS: &[char] = &['\'', '"', '`', '$', '\\', '(', ')', ';', '&', '|', '<', '>'];

/// Validate a loaded entry point and every node below it
pub fn validate_entry_point(name: &str, node: &Node) -> ManifestResult<()> {
    validate_name("entry point", name)?;
    validate_node(name, node)
}

/// Validate a single node and its descendants
fn validate_node(path: &str, node: &Node) -> ManifestResult<()> {
    if let Some(params) = &node.params {
        for param in params {
            validate_param(path, param)?;
        }
    }

    if let Some(commands) = &node.commands {
        for (name, child) in commands {
            validate_name("subcommand", name)?;
            validate_node(&format!("{} {}", path, name), child)?;
        }
    }

    Ok(())
}

/// Validate a parameter's invocation strings
fn validate_param(path: &str, param: &Param) -> ManifestResult<()> {
    match param {
        Param::Option(opt) => {
            if opt.opts.is_empty() {
                return Err(ManifestError::Invalid(format!(
                    "option in '{}' has no invocation strings",
                    path
                )));
            }
            for invocation in &opt.opts {
                if !invocation.starts_with('-') || invocation.trim_start_matches('-').is_empty() {
                    return Err(ManifestError::Invalid(format!(
                        "option '{}' in '{}' must start with '-' or '--'",
                        invocation, path
                    )));
                }
                validate_name("option", invocation)?;
            }
        }
        Param::Argument(arg) => validate_name("argument", &arg.name)?,
    }
    Ok(())
}

/// Validate that a name can be used as a bare shell token
pub fn validate_name(what: &str, name: &str) -> ManifestResult<()> {
    if name.is_empty() {
        return Err(ManifestError::Invalid(format!("{} name is empty", what)));
    }

    if let Some(c) = name
        .chars()
        .find(|c| c.is_whitespace() || FORBIDDEN_CHARS.contains(c))
    {
        return Err(ManifestError::Invalid(format!(
            "{} name '{}' contains unsupported character {:?}",
            what, name, c
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::types::{ArgumentParam, OptionParam};

    fn option(opts: &[&str]) -> Param {
        Param::Option(OptionParam {
            opts: opts.iter().map(|s| s.to_string()).collect(),
            help: None,
            multiple: false,
            takes_value: false,
            metavar: None,
        })
    }

    #[test]
    fn test_valid_tree() {
        let leaf = Node::command(Some("Add"), vec![option(&["-f", "--force"])]);
        let root = Node::group(None, vec![], [("add".to_string(), leaf)]);
        assert!(validate_entry_point("tool", &root).is_ok());
    }

    #[test]
    fn test_entry_point_name_with_space() {
        let root = Node::command(None, vec![]);
        let result = validate_entry_point("my tool", &root);
        assert!(matches!(result, Err(ManifestError::Invalid(_))));
    }

    #[test]
    fn test_nested_subcommand_name_with_quote() {
        let leaf = Node::command(None, vec![]);
        let sub = Node::group(None, vec![], [("it's".to_string(), leaf)]);
        let root = Node::group(None, vec![], [("sub".to_string(), sub)]);
        let err = validate_entry_point("tool", &root).unwrap_err();
        assert!(err.to_string().contains("it's"));
    }

    #[test]
    fn test_option_without_dash() {
        let root = Node::command(None, vec![option(&["verbose"])]);
        assert!(validate_entry_point("tool", &root).is_err());
    }

    #[test]
    fn test_option_only_dashes() {
        let root = Node::command(None, vec![option(&["--"])]);
        assert!(validate_entry_point("tool", &root).is_err());
    }

    #[test]
    fn test_option_without_invocations() {
        let root = Node::command(None, vec![option(&[])]);
        assert!(validate_entry_point("tool", &root).is_err());
    }

    #[test]
    fn test_argument_name_with_dollar() {
        let root = Node::command(
            None,
            vec![Param::Argument(ArgumentParam {
                name: "$path".to_string(),
                metavar: None,
                required: true,
                nargs: 1,
            })],
        );
        assert!(validate_entry_point("tool", &root).is_err());
    }

    #[test]
    fn test_dashed_names_are_fine() {
        assert!(validate_name("subcommand", "dry-run").is_ok());
        assert!(validate_name("option", "--dry-run").is_ok());
    }
}
