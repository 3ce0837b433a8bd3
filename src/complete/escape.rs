//! Help text sanitizing for generated shell code

use crate::complete::classify::Capabilities;
use crate::manifest::Param;
use regex::Regex;
use std::sync::LazyLock;

static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +").expect("space run pattern is valid"));

static AFTER_FIRST_SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s.*$").expect("sentence pattern is valid"));

/// Escape a string for use as a completion description.
///
/// Descriptions are quoted with single quotes by the generators and square
/// brackets delimit the description in a zsh optspec, so both are removed.
/// Only the first sentence is kept.
pub fn escape_description(desc: &str) -> String {
    let desc = desc.replace('\n', " ");
    let desc = desc.replace('\'', "");
    let desc = desc.replace('[', "{").replace(']', "}");
    let desc = SPACE_RUNS.replace_all(&desc, " ");
    AFTER_FIRST_SENTENCE.replace(&desc, "").into_owned()
}

/// Description for a subcommand entry: its help if present, else its name
pub fn describe<C: Capabilities + ?Sized>(obj: &C, name: &str) -> String {
    match obj.help() {
        Some(help) if !help.is_empty() => escape_description(help),
        _ => escape_description(name),
    }
}

/// Description for an option: its help if present, else its metavar
pub fn describe_param(param: &Param) -> String {
    match param.help() {
        Some(help) if !help.is_empty() => escape_description(help),
        _ => escape_description(&param.make_metavar()),
    }
}

/// Escape text placed inside a double-quoted zsh (or bash) word.
pub fn escape_zsh_double_quoted(text: &str) -> String {
    backslash_escape(text, &['\\', '"', '$', '`'])
}

/// Escape text placed inside a double-quoted fish word.
///
/// fish only honours backslashes before `\`, `"` and `$` there.
pub fn escape_fish_double_quoted(text: &str) -> String {
    backslash_escape(text, &['\\', '"', '$'])
}

/// Escape text placed inside a single-quoted fish word
pub fn escape_fish_single_quoted(text: &str) -> String {
    backslash_escape(text, &['\\', '\''])
}

fn backslash_escape(text: &str, special: &[char]) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if special.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{ArgumentParam, Node, OptionParam};

    #[test]
    fn test_keeps_first_sentence() {
        assert_eq!(
            escape_description("Does a thing. See also more text."),
            "Does a thing"
        );
    }

    #[test]
    fn test_single_sentence_keeps_period() {
        assert_eq!(escape_description("Does a thing."), "Does a thing.");
    }

    #[test]
    fn test_newlines_and_spaces() {
        assert_eq!(
            escape_description("Spans\nseveral   lines\n  here"),
            "Spans several lines here"
        );
    }

    #[test]
    fn test_sentence_break_across_newline() {
        assert_eq!(escape_description("First.\nSecond."), "First");
    }

    #[test]
    fn test_quotes_and_brackets() {
        assert_eq!(
            escape_description("Don't use [brackets]"),
            "Dont use {brackets}"
        );
    }

    #[test]
    fn test_version_numbers_are_not_sentence_breaks() {
        assert_eq!(escape_description("Requires v1.2 or later"), "Requires v1.2 or later");
    }

    #[test]
    fn test_empty() {
        assert_eq!(escape_description(""), "");
    }

    #[test]
    fn test_output_is_safe_and_idempotent() {
        let samples = [
            "",
            "plain",
            "It's a [test].  Second sentence.",
            "multi\n\nline\n text with 'quotes'",
            "  leading and trailing  ",
            "tab\tseparated. words",
            "a.b.c. d",
            "x [y] 'z'\n. tail",
        ];
        for sample in samples {
            let once = escape_description(sample);
            assert!(!once.contains('\n'), "{:?}", once);
            assert!(!once.contains('\''), "{:?}", once);
            assert!(!once.contains('['), "{:?}", once);
            assert!(!once.contains(']'), "{:?}", once);
            assert!(!once.contains("  "), "{:?}", once);
            assert_eq!(escape_description(&once), once, "input {:?}", sample);
        }
    }

    #[test]
    fn test_describe_prefers_help() {
        let node = Node::command(Some("Add files. Lots of them."), vec![]);
        assert_eq!(describe(&node, "add"), "Add files");
    }

    #[test]
    fn test_describe_falls_back_to_name() {
        let node = Node::command(None, vec![]);
        assert_eq!(describe(&node, "add"), "add");

        let empty = Node::command(Some(""), vec![]);
        assert_eq!(describe(&empty, "add"), "add");
    }

    #[test]
    fn test_describe_param() {
        let mut opt = OptionParam {
            opts: vec!["--out".to_string()],
            help: Some("Output file. Defaults to stdout.".to_string()),
            multiple: false,
            takes_value: true,
            metavar: None,
        };
        assert_eq!(describe_param(&Param::Option(opt.clone())), "Output file");

        opt.help = None;
        assert_eq!(describe_param(&Param::Option(opt)), "TEXT");

        let arg = Param::Argument(ArgumentParam {
            name: "src".to_string(),
            metavar: None,
            required: false,
            nargs: -1,
        });
        assert_eq!(describe_param(&arg), "{SRC...}");
    }

    #[test]
    fn test_zsh_double_quoted_neutralizes_expansion() {
        let help = escape_description(r#"Say "hi" to $(touch x) or `id` \ done"#);
        assert_eq!(
            escape_zsh_double_quoted(&help),
            r#"Say \"hi\" to \$(touch x) or \`id\` \\ done"#
        );
    }

    #[test]
    fn test_fish_double_quoted_neutralizes_expansion() {
        assert_eq!(
            escape_fish_double_quoted(r#"Say "hi" to $(touch x) \ `id`"#),
            r#"Say \"hi\" to \$(touch x) \\ `id`"#
        );
    }

    #[test]
    fn test_fish_single_quoted() {
        assert_eq!(escape_fish_single_quoted(r"trailing \"), r"trailing \\");
        assert_eq!(escape_fish_single_quoted("plain $HOME"), "plain $HOME");
    }
}
