//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tabtab::manifest::{ArgumentParam, Node, OptionParam, Param};
use tempfile::TempDir;

/// Create a temporary directory with a tabtab.yml file
pub fn create_test_manifest(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = temp_dir.path().join("tabtab.yml");
    fs::write(&manifest_path, content).unwrap();
    (temp_dir, manifest_path)
}

/// An option parameter
pub fn option(opts: &[&str], help: Option<&str>, multiple: bool, takes_value: bool) -> Param {
    Param::Option(OptionParam {
        opts: opts.iter().map(|s| s.to_string()).collect(),
        help: help.map(str::to_string),
        multiple,
        takes_value,
        metavar: None,
    })
}

/// A required single-value argument
pub fn argument(name: &str) -> Param {
    Param::Argument(ArgumentParam {
        name: name.to_string(),
        metavar: None,
        required: true,
        nargs: 1,
    })
}

/// A group with `add` and `remove` leaves
pub fn add_remove_group() -> Node {
    Node::group(
        Some("Manage things"),
        vec![option(&["--debug"], Some("Debug output"), false, false)],
        [
            (
                "add".to_string(),
                Node::command(
                    Some("Add a thing. Adds it for good."),
                    vec![option(&["-f", "--force"], Some("Overwrite"), false, false), argument("path")],
                ),
            ),
            (
                "remove".to_string(),
                Node::command(None, vec![option(&["--all"], None, false, false)]),
            ),
        ],
    )
}

/// `top` containing group `sub` containing leaf `leaf`
pub fn nested_tree() -> Node {
    let leaf = Node::command(
        Some("The leaf"),
        vec![option(&["--leaf-only"], Some("Only on the leaf"), false, true)],
    );
    let sub = Node::group(
        Some("The sub group"),
        vec![option(&["--sub-flag"], Some("Sub flag"), false, false)],
        [("leaf".to_string(), leaf)],
    );
    Node::group(
        Some("The top"),
        vec![option(&["--top-flag"], Some("Top flag"), false, false)],
        [("sub".to_string(), sub)],
    )
}
