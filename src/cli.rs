//! Command-line interface implementation for tplt.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_QUERY_FILE};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for tplt.
#[derive(Parser, Debug)]
#[command(author, version, about = "tplt: git-backed project templates", long_about = None)]
pub struct Args {
    /// Path to templates
    #[arg(short, long, global = true, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Print path to templates
    #[arg(short = 'w', long = "where")]
    pub show_where: bool,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands, each carrying its own typed options.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available templates
    Ls,
    /// Create new template
    New(NewArgs),
    /// Initialize a template
    Init(InitArgs),
    /// Collect answers to template questions
    Query(QueryArgs),
    /// Replace tokens in the current directory with collected answers
    ///
    /// Files are rewritten in place without a backup. The .git and .tplt
    /// directories are never touched, and symbolic links are neither
    /// followed nor rewritten.
    Replace(ReplaceArgs),
}

#[derive(ClapArgs, Debug)]
pub struct NewArgs {
    /// Name of new template to create
    pub template: String,
}

#[derive(ClapArgs, Debug)]
pub struct InitArgs {
    /// Name of template to use
    pub template: String,

    /// Path to clone template
    pub name: String,

    /// Run the init script without asking
    #[arg(long, overrides_with = "no_run")]
    pub run: bool,

    /// Never run the init script
    #[arg(long, overrides_with = "run")]
    pub no_run: bool,

    /// Commit changes without asking
    #[arg(long, overrides_with = "no_commit")]
    pub commit: bool,

    /// Never commit changes
    #[arg(long, overrides_with = "commit")]
    pub no_commit: bool,
}

impl InitArgs {
    /// `Some` when either `--run` or `--no-run` was given.
    pub fn run_decision(&self) -> Option<bool> {
        flag_pair(self.run, self.no_run)
    }

    /// `Some` when either `--commit` or `--no-commit` was given.
    pub fn commit_decision(&self) -> Option<bool> {
        flag_pair(self.commit, self.no_commit)
    }
}

fn flag_pair(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(ClapArgs, Debug)]
pub struct QueryArgs {
    /// Question to ask, as name=question (repeatable)
    #[arg(short = 'q', long = "question", value_name = "NAME=QUESTION")]
    pub questions: Vec<String>,

    /// Default answer, as name=default (repeatable)
    #[arg(short = 'd', long = "default", value_name = "NAME=DEFAULT")]
    pub defaults: Vec<String>,

    /// Where to write the answers
    #[arg(short, long, default_value = DEFAULT_QUERY_FILE)]
    pub output: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct ReplaceArgs {
    /// Answer file produced by `query`
    #[arg(short = 'q', long = "query", default_value = DEFAULT_QUERY_FILE)]
    pub query_file: PathBuf,

    /// Token delimiter
    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Glob of paths to leave untouched (repeatable)
    #[arg(short, long = "exclude", value_name = "GLOB")]
    pub excludes: Vec<String>,
}

/// Parses command line arguments, exiting with clap's error handling on
/// invalid input.
pub fn get_args() -> Args {
    Args::parse()
}
