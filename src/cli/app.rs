//! Main CLI application

use crate::complete::{classify, generate_completions, Shell};
use crate::error::{ManifestError, Result, TabtabError};
use crate::manifest::{load_entry_point, parse_manifest_auto, parse_manifest_file, Manifest};
use crate::ui::{Reporter, Verbosity};
use anyhow::Context as _;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

/// CLI application bound to a loaded manifest
pub struct App {
    /// Parsed manifest
    manifest: Manifest,
    /// Manifest file path; includes resolve relative to its directory
    manifest_path: PathBuf,
    /// Diagnostics output
    reporter: Reporter,
}

/// What `generate` should produce
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the `zsh/`, `bash/` and `fish/` folders are created in
    pub out_dir: PathBuf,
    /// Dialects to write
    pub shells: Vec<Shell>,
    /// Entry points to process; empty means all of them
    pub names: Vec<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            out_dir: PathBuf::from("."),
            shells: Shell::ALL.to_vec(),
            names: Vec::new(),
        }
    }
}

/// Outcome of a `generate` run, by entry point name
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Entry points completions were written for
    pub generated: Vec<String>,
    /// Entry points that are not command-line shaped
    pub skipped: Vec<String>,
    /// Entry points that failed to load
    pub failed: Vec<String>,
}

impl App {
    pub fn new(manifest: Manifest, manifest_path: PathBuf, reporter: Reporter) -> Self {
        App {
            manifest,
            manifest_path,
            reporter,
        }
    }

    /// Create app with automatic manifest discovery
    pub fn discover(reporter: Reporter) -> Result<Self> {
        let (manifest, manifest_path) = parse_manifest_auto()?;
        Ok(App::new(manifest, manifest_path, reporter))
    }

    /// Create app with a specific manifest file
    pub fn with_manifest_file(path: PathBuf, reporter: Reporter) -> Result<Self> {
        let manifest = parse_manifest_file(&path)?;
        Ok(App::new(manifest, path, reporter))
    }

    fn base_dir(&self) -> &Path {
        self.manifest_path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Entry point names to process, sorted unless given explicitly
    fn selected_names(&self, names: &[String]) -> Result<Vec<String>> {
        if names.is_empty() {
            return Ok(self.manifest.entrypoints.keys().cloned().collect());
        }
        for name in names {
            if !self.manifest.entrypoints.contains_key(name) {
                return Err(ManifestError::EntryPointNotFound(name.clone()).into());
            }
        }
        Ok(names.to_vec())
    }

    /// Write completion scripts for the selected entry points.
    ///
    /// An entry point that fails to load is reported and skipped; a failed
    /// write aborts the run.
    pub fn generate(&self, options: &GenerateOptions) -> Result<GenerateSummary> {
        let mut summary = GenerateSummary::default();

        for name in self.selected_names(&options.names)? {
            let Some(entry) = self.manifest.entrypoints.get(&name) else {
                continue;
            };

            let loaded = load_entry_point(&name, entry, self.base_dir())
                .with_context(|| format!("Cannot generate completions for {}", name));
            let node = match loaded {
                Ok(node) => node,
                Err(e) => {
                    self.reporter.error(&format!("{:#}", e));
                    summary.failed.push(name);
                    continue;
                }
            };

            if !classify(&node).is_recognized() {
                self.reporter
                    .warn(&format!("{} is not a command-line entry point, skipping.", name));
                summary.skipped.push(name);
                continue;
            }

            self.reporter
                .info(&format!("Generating completions for {}...", name));
            for path in generate_completions(&options.out_dir, &name, &node, &options.shells)? {
                self.reporter.debug(&format!("Wrote {}", path.display()));
            }
            summary.generated.push(name);
        }

        Ok(summary)
    }

    /// One `name<TAB>kind` line per entry point
    pub fn list(&self) -> Vec<String> {
        self.manifest
            .entrypoints
            .iter()
            .map(|(name, entry)| match load_entry_point(name, entry, self.base_dir()) {
                Ok(node) => format!("{}\t{}", name, classify(&node).kind()),
                Err(e) => format!("{}\terror: {}", name, e),
            })
            .collect()
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("tabtab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate shell completion scripts from a YAML command tree")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to tabtab.yml manifest")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no diagnostics")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Write completion scripts for the manifest's entry points")
                .arg(
                    Arg::new("output-dir")
                        .short('o')
                        .long("output-dir")
                        .value_name("DIR")
                        .value_parser(value_parser!(PathBuf))
                        .default_value(".")
                        .help("Directory to create the zsh/, bash/ and fish/ folders in"),
                )
                .arg(
                    Arg::new("shell")
                        .long("shell")
                        .value_name("SHELL")
                        .value_parser(value_parser!(Shell))
                        .action(ArgAction::Append)
                        .help("Only generate for this shell (repeatable)"),
                )
                .arg(
                    Arg::new("names")
                        .value_name("NAME")
                        .num_args(0..)
                        .help("Entry points to generate for (default: all)"),
                ),
        )
        .subcommand(Command::new("list").about("List entry points and how they classify"))
        .subcommand(
            Command::new("completions")
                .about("Print tabtab's own completion script")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .required(true)
                        .value_parser(value_parser!(clap_complete::Shell)),
                ),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Read `generate` options from its matches
fn generate_options(matches: &ArgMatches) -> GenerateOptions {
    let mut shells: Vec<Shell> = matches
        .get_many::<Shell>("shell")
        .map(|values| values.copied().collect())
        .unwrap_or_else(|| Shell::ALL.to_vec());
    let mut seen = BTreeSet::new();
    shells.retain(|shell| seen.insert(*shell));

    GenerateOptions {
        out_dir: matches
            .get_one::<PathBuf>("output-dir")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        shells,
        names: matches
            .get_many::<String>("names")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    }
}

/// Load the app, from `--file` when given
fn load_app(matches: &ArgMatches, reporter: Reporter) -> Result<App> {
    match matches.get_one::<PathBuf>("file") {
        Some(path) => App::with_manifest_file(path.clone(), reporter),
        None => App::discover(reporter),
    }
}

/// Run the CLI with already parsed arguments
pub fn run_matches(matches: &ArgMatches) -> Result<()> {
    let Some((name, sub)) = matches.subcommand() else {
        return Ok(());
    };
    // Global flags are propagated into the subcommand's matches.
    let reporter = Reporter::new(get_verbosity(sub));

    match name {
        "completions" => {
            if let Some(shell) = sub.get_one::<clap_complete::Shell>("shell") {
                clap_complete::generate(*shell, &mut build_command(), "tabtab", &mut io::stdout());
            }
            Ok(())
        }
        "list" => {
            let app = load_app(sub, reporter)?;
            for line in app.list() {
                println!("{}", line);
            }
            Ok(())
        }
        "generate" => {
            let app = load_app(sub, reporter)?;
            let summary = app.generate(&generate_options(sub))?;
            if summary.generated.is_empty() {
                return Err(TabtabError::NothingGenerated);
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Run the CLI application with process arguments
pub fn run() -> Result<()> {
    let matches = build_command().get_matches();
    run_matches(&matches)
}
