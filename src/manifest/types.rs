//! Core manifest types
//!
//! This module defines the data structures that represent a tabtab.yml manifest
//! and the command trees it declares.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level manifest structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Manifest {
    /// Entry points, keyed by the program name the completions are for
    #[serde(default)]
    pub entrypoints: BTreeMap<String, EntryRef>,
}

/// A reference to an entry point's command tree
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EntryRef {
    /// Tree stored in another YAML file, relative to the manifest
    Include { include: String },

    /// Tree declared inline
    Inline(Node),

    /// Anything else, e.g. a bare `module:function` string
    Opaque(serde_yaml::Value),
}

/// A node of a command tree.
///
/// A node carries no kind tag. Whether it is a group or a leaf command is
/// decided by which fields it exposes; see [`crate::complete::classify`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Node {
    /// Help text shown next to the node in completion menus
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Parameters accepted by this node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Param>>,

    /// Named subcommands; present only on groups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<BTreeMap<String, Node>>,
}

/// A parameter of a command or group
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Param {
    /// A flagged parameter
    Option(OptionParam),

    /// A positional parameter
    Argument(ArgumentParam),
}

/// An option (flag) definition
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OptionParam {
    /// Invocation strings, e.g. `-v` and `--verbose`
    pub opts: Vec<String>,

    /// Help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Whether the option may be repeated
    #[serde(default)]
    pub multiple: bool,

    /// Whether the option consumes a following value
    #[serde(default)]
    pub takes_value: bool,

    /// Display name for the value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metavar: Option<String>,
}

/// An argument (positional parameter) definition
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArgumentParam {
    /// Argument name
    pub name: String,

    /// Display name for the value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metavar: Option<String>,

    /// Required argument
    #[serde(default = "default_required")]
    pub required: bool,

    /// Number of values taken; -1 means any number
    #[serde(default = "default_nargs")]
    pub nargs: i32,
}

fn default_required() -> bool {
    true
}

fn default_nargs() -> i32 {
    1
}

impl Param {
    /// Invocation strings of this parameter
    pub fn opts(&self) -> &[String] {
        match self {
            Param::Option(opt) => &opt.opts,
            Param::Argument(arg) => std::slice::from_ref(&arg.name),
        }
    }

    /// Help text, if the parameter has any
    pub fn help(&self) -> Option<&str> {
        match self {
            Param::Option(opt) => opt.help.as_deref(),
            Param::Argument(_) => None,
        }
    }

    /// Display placeholder for the parameter's value
    pub fn make_metavar(&self) -> String {
        match self {
            Param::Option(opt) => opt.make_metavar(),
            Param::Argument(arg) => arg.make_metavar(),
        }
    }

    /// The option definition, if this parameter is an option
    pub fn as_option(&self) -> Option<&OptionParam> {
        match self {
            Param::Option(opt) => Some(opt),
            Param::Argument(_) => None,
        }
    }
}

impl OptionParam {
    pub fn make_metavar(&self) -> String {
        if let Some(metavar) = &self.metavar {
            return metavar.clone();
        }
        if self.takes_value {
            "TEXT".to_string()
        } else {
            "BOOLEAN".to_string()
        }
    }
}

impl ArgumentParam {
    pub fn make_metavar(&self) -> String {
        let mut metavar = self
            .metavar
            .clone()
            .unwrap_or_else(|| self.name.to_uppercase());
        if self.nargs != 1 {
            metavar.push_str("...");
        }
        if !self.required {
            metavar = format!("[{}]", metavar);
        }
        metavar
    }
}

impl Node {
    /// Create a leaf command node
    pub fn command(help: Option<&str>, params: Vec<Param>) -> Self {
        Node {
            help: help.map(str::to_string),
            params: Some(params),
            commands: None,
        }
    }

    /// Create a group node
    pub fn group(
        help: Option<&str>,
        params: Vec<Param>,
        commands: impl IntoIterator<Item = (String, Node)>,
    ) -> Self {
        Node {
            help: help.map(str::to_string),
            params: Some(params),
            commands: Some(commands.into_iter().collect()),
        }
    }
}
