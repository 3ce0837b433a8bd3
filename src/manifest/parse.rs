//! Manifest file parsing, discovery and entry-point loading

use crate::error::{ManifestError, ManifestResult, TabtabError};
use crate::manifest::schema::validate_entry_point;
use crate::manifest::types::{EntryRef, Manifest, Node};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default manifest file names to search for
const MANIFEST_FILE_NAMES: &[&str] = &["tabtab.yml", "tabtab.yaml"];

/// Find the manifest file by searching current and parent directories
pub fn find_manifest_file() -> ManifestResult<PathBuf> {
    find_manifest_file_from(env::current_dir().map_err(|e| {
        ManifestError::Invalid(format!("Failed to get current directory: {}", e))
    })?)
}

/// Find the manifest file starting from a specific directory
pub fn find_manifest_file_from(start_dir: PathBuf) -> ManifestResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        for file_name in MANIFEST_FILE_NAMES {
            let manifest_path = current_dir.join(file_name);
            searched_paths.push(manifest_path.display().to_string());

            if manifest_path.is_file() {
                return Ok(manifest_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(ManifestError::NotFound(searched_paths.join(", "))),
        }
    }
}

/// Parse a manifest file from a path
pub fn parse_manifest_file(path: &Path) -> Result<Manifest, TabtabError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ManifestError::Invalid(format!("Failed to read file: {}", e)))?;

    parse_manifest(&contents)
}

/// Parse a manifest from a string
pub fn parse_manifest(yaml: &str) -> Result<Manifest, TabtabError> {
    let manifest: Manifest = serde_yaml::from_str(yaml)?;
    Ok(manifest)
}

/// Parse a manifest with automatic file discovery
pub fn parse_manifest_auto() -> Result<(Manifest, PathBuf), TabtabError> {
    let manifest_path = find_manifest_file()?;
    let manifest = parse_manifest_file(&manifest_path)?;
    Ok((manifest, manifest_path))
}

/// Resolve an entry point into a fully loaded, validated command tree.
///
/// Includes are read relative to `base_dir`. A bare scalar entry (such as a
/// `module:function` reference) loads as an empty node, which the classifier
/// reports as unrecognized.
pub fn load_entry_point(name: &str, entry: &EntryRef, base_dir: &Path) -> ManifestResult<Node> {
    let node = match entry {
        EntryRef::Include { include } => load_included_node(&base_dir.join(include))?,
        EntryRef::Inline(node) => node.clone(),
        EntryRef::Opaque(Value::Mapping(_)) => {
            return Err(ManifestError::Invalid(format!(
                "entry point '{}' does not describe a command tree",
                name
            )));
        }
        EntryRef::Opaque(_) => Node::default(),
    };

    validate_entry_point(name, &node)?;
    Ok(node)
}

/// Load a command tree from an included file
fn load_included_node(path: &Path) -> ManifestResult<Node> {
    let contents = fs::read_to_string(path).map_err(|e| ManifestError::IncludeFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    serde_yaml::from_str(&contents).map_err(|e| ManifestError::IncludeFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
