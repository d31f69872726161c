#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use git2::{Repository, Signature};
use tplt::error::{Error, Result};
use tplt::prompt::Prompter;

/// Prompter that replays canned answers and records every question asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    inputs: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(inputs: &[&str]) -> Self {
        let prompter = Self::new();
        prompter.inputs.borrow_mut().extend(inputs.iter().map(|s| s.to_string()));
        prompter
    }

    pub fn with_confirms(confirms: &[bool]) -> Self {
        let prompter = Self::new();
        prompter.confirms.borrow_mut().extend(confirms.iter().copied());
        prompter
    }

    pub fn asked_count(&self) -> usize {
        self.asked.borrow().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.inputs
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::PromptError(format!("unexpected question '{prompt}'")))
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.confirms
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::PromptError(format!("unexpected question '{prompt}'")))
    }
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Stages everything in `repo` and commits it.
pub fn commit_everything(repo: &Repository, message: &str) {
    let mut index = repo.index().unwrap();
    index.add_all(["*"], git2::IndexAddOption::DEFAULT, None).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let signature = Signature::now("test", "test@example.com").unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents).unwrap();
}

/// Creates a committed template repository `name` under `root` holding
/// `files` and, optionally, an executable `.tplt/init`.
pub fn make_template(
    root: &Path,
    name: &str,
    files: &[(&str, &str)],
    init_script: Option<&str>,
) -> Repository {
    let path = root.join(name);
    let repo = Repository::init(&path).unwrap();
    for (relative, content) in files {
        write(&path, relative, content);
    }
    if let Some(script) = init_script {
        write(&path, ".tplt/init", script);
        make_executable(&path.join(".tplt/init"));
    }
    commit_everything(&repo, "Initial commit");
    repo
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut permissions = fs::metadata(path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
