//! Manifest parsing and validation
//!
//! This module handles parsing of tabtab.yml manifests, loading of the
//! entry points they declare, and validation of command trees.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
