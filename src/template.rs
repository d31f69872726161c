//! Template lifecycle: listing, creating and instantiating templates.

use crate::constants::COMMIT_MESSAGE;
use crate::error::Result;
use crate::hooks::{get_init_script, run_init_script};
use crate::paths::{ensure_absent, ensure_dir, ensure_present};
use crate::prompt::{decide, Prompter};
use crate::repo::{clone_template, commit_all, init_template, is_dirty};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// What happened to the init script during `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// The instance has no `.tplt/init`.
    Absent,
    Run,
    Skipped,
}

/// What happened to the instance's changes during `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStep {
    /// The working tree was clean, or there was no script to change it.
    NotNeeded,
    Committed,
    Skipped,
}

/// Result of instantiating a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub instance: PathBuf,
    pub script: ScriptStep,
    pub commit: CommitStep,
}

/// Explicit answers for the decisions `init` would otherwise ask about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitDecisions {
    pub run: Option<bool>,
    pub commit: Option<bool>,
}

/// Returns the names of all templates under `root`, sorted.
///
/// The root is created when it does not exist yet.
pub fn list_templates<P: AsRef<Path>>(root: P) -> Result<Vec<String>> {
    let root = ensure_dir(root)?;
    let mut names = Vec::new();
    for entry in std::fs::read_dir(&root)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Creates an empty template repository named `template` under `root`.
///
/// # Errors
/// * `Error::AlreadyExistsError` if the template already exists
/// * `Error::Git2Error` if the repository cannot be initialized
pub fn new_template<P: AsRef<Path>>(root: P, template: &str) -> Result<PathBuf> {
    let root = ensure_dir(root)?;
    let path = root.join(template);
    ensure_absent(&path)?;

    init_template(&path)?;
    info!("Created template '{}'.", template);
    Ok(path)
}

/// Clones `template` from `root` into `cwd/name`, then runs the init
/// script and commits its changes as decided.
///
/// Steps after the clone: a missing script ends the flow. Otherwise the
/// script is run or skipped, and if the working tree is then dirty the
/// changes are committed or left alone. The script's exit status does not
/// influence the commit step.
///
/// # Errors
/// * `Error::NotFoundError` if the template does not exist
/// * `Error::AlreadyExistsError` if the instance path exists
/// * `Error::Git2Error` if cloning or committing fails
pub fn init_instance<P: AsRef<Path>, Q: AsRef<Path>>(
    prompt: &dyn Prompter,
    root: P,
    template: &str,
    cwd: Q,
    name: &str,
    decisions: InitDecisions,
) -> Result<InitOutcome> {
    let root = ensure_dir(root)?;
    let template_path = root.join(template);
    ensure_present(&template_path)?;

    let instance = cwd.as_ref().join(name);
    ensure_absent(&instance)?;

    let repo = clone_template(&template_path, &instance)?;
    println!("{}", instance.display());

    let script_path = get_init_script(&instance);
    if !script_path.is_file() {
        debug!("No init script in '{}'.", instance.display());
        return Ok(InitOutcome {
            instance,
            script: ScriptStep::Absent,
            commit: CommitStep::NotNeeded,
        });
    }

    let script = if decide(prompt, decisions.run, "Run the template's init script?")? {
        run_init_script(&script_path, &instance, name)?;
        ScriptStep::Run
    } else {
        ScriptStep::Skipped
    };

    let commit = if !is_dirty(&repo)? {
        CommitStep::NotNeeded
    } else if decide(prompt, decisions.commit, "Commit the changes?")? {
        commit_all(&repo, COMMIT_MESSAGE)?;
        CommitStep::Committed
    } else {
        CommitStep::Skipped
    };

    info!("Initialized '{}' from '{}'.", instance.display(), template);
    Ok(InitOutcome { instance, script, commit })
}
