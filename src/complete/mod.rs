//! Completion script generation
//!
//! This module walks command trees and emits completion scripts for zsh,
//! bash and fish.

pub mod bash;
pub mod classify;
pub mod emit;
pub mod escape;
pub mod fish;
pub mod zsh;

// Re-export main types
pub use bash::*;
pub use classify::*;
pub use emit::*;
pub use escape::*;
pub use fish::*;
pub use zsh::*;

/// Indent generated lines by `depth` levels of four spaces, leaving blank
/// lines blank
pub(crate) fn indented(
    depth: usize,
    lines: impl IntoIterator<Item = String>,
) -> impl Iterator<Item = String> {
    let pad = "    ".repeat(depth);
    lines.into_iter().map(move |line| {
        if line.is_empty() {
            line
        } else {
            format!("{}{}", pad, line)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indented() {
        let lines: Vec<String> = indented(2, ["a".to_string(), String::new()]).collect();
        assert_eq!(lines, vec!["        a".to_string(), String::new()]);
    }
}
