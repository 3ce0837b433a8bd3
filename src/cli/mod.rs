//! CLI interface and argument parsing
//!
//! This module handles command-line parsing and drives completion
//! generation for the entry points of a manifest.

pub mod app;

// Re-export main types
pub use app::*;
