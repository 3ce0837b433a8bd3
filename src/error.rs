//! Error types for tabtab

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tabtab operations
pub type Result<T> = std::result::Result<T, TabtabError>;

/// Main error type for tabtab
#[derive(Error, Debug)]
pub enum TabtabError {
    /// Manifest discovery, loading and validation errors
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A completion script could not be written
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Did not find a command-line entry point to generate completions for")]
    NothingGenerated,
}

/// Manifest parsing and validation errors
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to find manifest file (searched: {0})")]
    NotFound(String),

    #[error("Invalid manifest: {0}")]
    Invalid(String),

    #[error("Failed to include file '{}': {error}", path.display())]
    IncludeFile { path: PathBuf, error: String },

    #[error("Entry point '{0}' is not defined")]
    EntryPointNotFound(String),
}

/// Specialized result type for manifest operations
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;
