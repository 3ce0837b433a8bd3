//! tabtab - shell completion scripts from a command tree
//!
//! tabtab reads command trees (groups, subcommands, options and arguments)
//! from a YAML manifest and writes completion scripts for zsh, bash and fish.

// Public modules
pub mod cli;
pub mod complete;
pub mod error;
pub mod manifest;
pub mod ui;

// Re-export commonly used types
pub use error::{Result, TabtabError};

/// Current version of tabtab
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
