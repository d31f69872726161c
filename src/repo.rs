//! Git operations on templates and instances.
//!
//! Templates are plain git repositories under the template root; an
//! instance is a clone of one. Everything here is a thin layer over
//! `git2`, failures surface as `Error::Git2Error`.
use crate::error::Result;
use git2::{IndexAddOption, Repository, Signature, StatusOptions};
use log::debug;
use std::path::Path;

/// Fallback identity used when git has no `user.name`/`user.email`.
const FALLBACK_NAME: &str = "tplt";
const FALLBACK_EMAIL: &str = "tplt@localhost";

/// Creates an empty repository at `path`.
pub fn init_template<P: AsRef<Path>>(path: P) -> Result<Repository> {
    let path = path.as_ref();
    debug!("Initializing template repository '{}'.", path.display());
    Ok(Repository::init(path)?)
}

/// Clones the template repository at `template` into `instance`.
pub fn clone_template<P: AsRef<Path>, Q: AsRef<Path>>(
    template: P,
    instance: Q,
) -> Result<Repository> {
    let template = template.as_ref();
    let instance = instance.as_ref();

    // Opening first turns "not a repository" into a clear git error.
    Repository::open(template)?;

    let template = template.canonicalize()?;
    let source = template.to_string_lossy();
    debug!("Cloning '{}' to '{}'.", source, instance.display());
    let mut builder = git2::build::RepoBuilder::new();
    Ok(builder.clone(&source, instance)?)
}

/// Returns `true` if the working tree has staged, unstaged or untracked
/// changes.
pub fn is_dirty(repo: &Repository) -> Result<bool> {
    let mut options = StatusOptions::new();
    options.include_untracked(true).recurse_untracked_dirs(true);
    let statuses = repo.statuses(Some(&mut options))?;
    Ok(!statuses.is_empty())
}

/// Stages all changes (including deletions) and commits them on HEAD.
pub fn commit_all(repo: &Repository, message: &str) -> Result<git2::Oid> {
    let mut index = repo.index()?;
    index.add_all(["*"], IndexAddOption::DEFAULT, None)?;
    index.update_all(["*"], None)?;
    index.write()?;

    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    let signature = match repo.signature() {
        Ok(signature) => signature,
        Err(_) => Signature::now(FALLBACK_NAME, FALLBACK_EMAIL)?,
    };

    // A clone of an empty template has an unborn HEAD and no parent.
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let oid = repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;
    debug!("Created commit {}.", oid);
    Ok(oid)
}
