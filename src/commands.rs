//! Subcommand handlers.
//!
//! `main` parses [`Args`] once and hands them to [`run`], which builds
//! the shared [`Context`] and dispatches to exactly one handler. The
//! template root is only resolved by the handlers that use it.

use crate::answers::{parse_pairs, query};
use crate::cli::{Args, Command, InitArgs, NewArgs, QueryArgs, ReplaceArgs};
use crate::config::templates_root;
use crate::error::{Error, Result};
use crate::processor::replace;
use crate::prompt::Prompter;
use crate::template::{init_instance, list_templates, new_template, InitDecisions};
use std::path::{Path, PathBuf};

/// Computes the template root from an optional `--path` override.
pub type RootResolver = fn(Option<&Path>) -> Result<PathBuf>;

/// State shared by all handlers.
pub struct Context<'a> {
    /// Value of `--path`, if given.
    pub path: Option<PathBuf>,
    pub resolve_root: RootResolver,
    pub cwd: PathBuf,
    pub prompt: &'a dyn Prompter,
}

impl Context<'_> {
    pub fn templates_root(&self) -> Result<PathBuf> {
        (self.resolve_root)(self.path.as_deref())
    }
}

/// Builds the context and runs the requested subcommand.
///
/// With `--where` the template root is printed and no subcommand runs.
pub fn run(args: Args, prompt: &dyn Prompter) -> Result<()> {
    let context = Context {
        path: args.path,
        resolve_root: templates_root,
        cwd: std::env::current_dir()?,
        prompt,
    };
    if args.show_where {
        println!("{}", context.templates_root()?.display());
        return Ok(());
    }

    let command = args.command.ok_or(Error::NoCommandError)?;
    dispatch(&context, command)
}

/// Runs one subcommand against an already resolved context.
pub fn dispatch(context: &Context<'_>, command: Command) -> Result<()> {
    match command {
        Command::Ls => ls(context),
        Command::New(args) => new(context, args),
        Command::Init(args) => init(context, args),
        Command::Query(args) => run_query(context, args),
        Command::Replace(args) => run_replace(context, args),
    }
}

fn ls(context: &Context<'_>) -> Result<()> {
    let names = list_templates(context.templates_root()?)?;
    println!("Available templates:\n");
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn new(context: &Context<'_>, args: NewArgs) -> Result<()> {
    let path = new_template(context.templates_root()?, &args.template)?;
    println!("{}", path.display());
    Ok(())
}

fn init(context: &Context<'_>, args: InitArgs) -> Result<()> {
    let decisions =
        InitDecisions { run: args.run_decision(), commit: args.commit_decision() };
    init_instance(
        context.prompt,
        context.templates_root()?,
        &args.template,
        &context.cwd,
        &args.name,
        decisions,
    )?;
    Ok(())
}

fn run_query(context: &Context<'_>, args: QueryArgs) -> Result<()> {
    let questions = parse_pairs(&args.questions)?;
    let defaults = parse_pairs(&args.defaults)?;
    let output = context.cwd.join(&args.output);
    query(context.prompt, &questions, &defaults, &output)?;
    println!("Answers saved to '{}'.", output.display());
    Ok(())
}

fn run_replace(context: &Context<'_>, args: ReplaceArgs) -> Result<()> {
    let summary = replace(&context.cwd, &args.query_file, &args.delimiter, &args.excludes)?;
    println!(
        "Replaced {} token(s) in {} file(s).",
        summary.replacements, summary.files
    );
    Ok(())
}
