//! Capability classification of command tree objects
//!
//! Generators never look at a concrete type. They ask an object which
//! accessors it exposes and classify it once, so anything that forwards the
//! [`Capabilities`] accessors (references, smart pointers, decorators) is
//! treated exactly like the node it wraps.

use crate::manifest::{Node, Param};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;

/// Structural accessors a command tree object may expose
pub trait Capabilities {
    /// Help text
    fn help(&self) -> Option<&str>;

    /// Parameter list, if the object accepts parameters
    fn params(&self) -> Option<&[Param]>;

    /// Named sub-entries, if the object dispatches to subcommands
    fn subcommands(&self) -> Option<&BTreeMap<String, Node>>;
}

impl Capabilities for Node {
    fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    fn params(&self) -> Option<&[Param]> {
        self.params.as_deref()
    }

    fn subcommands(&self) -> Option<&BTreeMap<String, Node>> {
        self.commands.as_ref()
    }
}

macro_rules! forward_capabilities {
    ($($wrapper:ty),*) => {
        $(
            impl<T: Capabilities + ?Sized> Capabilities for $wrapper {
                fn help(&self) -> Option<&str> {
                    (**self).help()
                }

                fn params(&self) -> Option<&[Param]> {
                    (**self).params()
                }

                fn subcommands(&self) -> Option<&BTreeMap<String, Node>> {
                    (**self).subcommands()
                }
            }
        )*
    };
}

forward_capabilities!(&T, Box<T>, Rc<T>, Arc<T>);

/// Result of classifying an object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classified<'a> {
    /// Dispatches to named subcommands; `params` are its own flags
    Group {
        help: Option<&'a str>,
        params: &'a [Param],
        commands: &'a BTreeMap<String, Node>,
    },

    /// Accepts parameters, has no subcommands
    Command {
        help: Option<&'a str>,
        params: &'a [Param],
    },

    /// Neither; generators emit nothing for it
    Unrecognized,
}

/// Whether the object behaves as a command group
pub fn is_group<C: Capabilities + ?Sized>(obj: &C) -> bool {
    obj.subcommands().is_some()
}

/// Whether the object behaves as a leaf command
pub fn is_command<C: Capabilities + ?Sized>(obj: &C) -> bool {
    !is_group(obj) && obj.params().is_some()
}

/// Classify an object by the capabilities it exposes
pub fn classify<C: Capabilities + ?Sized>(obj: &C) -> Classified<'_> {
    if let Some(commands) = obj.subcommands() {
        Classified::Group {
            help: obj.help(),
            params: obj.params().unwrap_or_default(),
            commands,
        }
    } else if let Some(params) = obj.params() {
        Classified::Command {
            help: obj.help(),
            params,
        }
    } else {
        Classified::Unrecognized
    }
}

impl Classified<'_> {
    /// Short label used in listings and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Classified::Group { .. } => "group",
            Classified::Command { .. } => "command",
            Classified::Unrecognized => "unrecognized",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Classified::Unrecognized)
    }
}
