mod common;

use std::fs;

use common::{make_template, write, ScriptedPrompter};
use git2::Repository;
use tempfile::TempDir;
use tplt::error::Error;
use tplt::repo::is_dirty;
use tplt::template::{
    init_instance, list_templates, new_template, CommitStep, InitDecisions, ScriptStep,
};

#[test]
fn test_ls_creates_root_and_sorts() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("templates");

    assert!(list_templates(&root).unwrap().is_empty());
    assert!(root.is_dir());

    fs::create_dir(root.join("web")).unwrap();
    fs::create_dir(root.join("cli")).unwrap();
    assert_eq!(list_templates(&root).unwrap(), ["cli", "web"]);
}

#[test]
fn test_new_creates_empty_repository() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("templates");

    let path = new_template(&root, "template").unwrap();

    assert_eq!(path, root.join("template"));
    let repo = Repository::open(&path).unwrap();
    assert!(repo.is_empty().unwrap());
    assert_eq!(list_templates(&root).unwrap(), ["template"]);
}

#[test]
fn test_new_refuses_existing_template() {
    let temp_dir = TempDir::new().unwrap();
    new_template(temp_dir.path(), "template").unwrap();

    assert!(matches!(
        new_template(temp_dir.path(), "template"),
        Err(Error::AlreadyExistsError { .. })
    ));
}

#[test]
fn test_init_without_script_only_clones() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("templates");
    let cwd = temp_dir.path().join("work");
    fs::create_dir_all(&cwd).unwrap();
    make_template(&root, "rust", &[("README.md", "&&NAME&&\n")], None);
    let prompter = ScriptedPrompter::new();

    let outcome =
        init_instance(&prompter, &root, "rust", &cwd, "demo", InitDecisions::default())
            .unwrap();

    assert_eq!(outcome.instance, cwd.join("demo"));
    assert_eq!(outcome.script, ScriptStep::Absent);
    assert_eq!(outcome.commit, CommitStep::NotNeeded);
    assert_eq!(prompter.asked_count(), 0);
    assert_eq!(fs::read_to_string(cwd.join("demo/README.md")).unwrap(), "&&NAME&&\n");
    assert!(cwd.join("demo/.git").is_dir());
}

#[test]
fn test_init_missing_template() {
    let temp_dir = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new();

    let result = init_instance(
        &prompter,
        temp_dir.path(),
        "nope",
        temp_dir.path(),
        "demo",
        InitDecisions::default(),
    );

    assert!(matches!(result, Err(Error::NotFoundError { .. })));
}

#[test]
fn test_init_refuses_existing_instance() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("templates");
    let cwd = temp_dir.path().join("work");
    make_template(&root, "rust", &[("README.md", "x")], None);
    write(&cwd, "demo/keep.txt", "mine");

    let result = init_instance(
        &ScriptedPrompter::new(),
        &root,
        "rust",
        &cwd,
        "demo",
        InitDecisions::default(),
    );

    assert!(matches!(result, Err(Error::AlreadyExistsError { .. })));
    assert_eq!(fs::read_to_string(cwd.join("demo/keep.txt")).unwrap(), "mine");
}

#[cfg(unix)]
mod with_script {
    use super::*;

    const SCRIPT: &str = "#!/bin/sh\n\
        printf '%s' \"$TPLT_INSTANCE_NAME\" > name.txt\n\
        printf '%s' \"$TPLT_INSTANCE_PATH\" > path.txt\n";

    fn setup(script: &str) -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("templates");
        let cwd = temp_dir.path().join("work");
        fs::create_dir_all(&cwd).unwrap();
        make_template(&root, "rust", &[("README.md", "hello\n")], Some(script));
        (temp_dir, root, cwd)
    }

    #[test]
    fn test_script_runs_with_instance_environment_and_commits() {
        let (_temp_dir, root, cwd) = setup(SCRIPT);
        let prompter = ScriptedPrompter::new();
        let decisions = InitDecisions { run: Some(true), commit: Some(true) };

        let outcome = init_instance(&prompter, &root, "rust", &cwd, "demo", decisions).unwrap();

        assert_eq!(outcome.script, ScriptStep::Run);
        assert_eq!(outcome.commit, CommitStep::Committed);
        assert_eq!(prompter.asked_count(), 0);

        let instance = cwd.join("demo");
        assert_eq!(fs::read_to_string(instance.join("name.txt")).unwrap(), "demo");
        assert_eq!(
            fs::read_to_string(instance.join("path.txt")).unwrap(),
            instance.canonicalize().unwrap().to_string_lossy()
        );

        let repo = Repository::open(&instance).unwrap();
        assert!(!is_dirty(&repo).unwrap());
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.message(), Some("Initialize from template"));
        assert_eq!(head.parent_count(), 1);
    }

    #[test]
    fn test_prompts_decide_when_flags_are_absent() {
        let (_temp_dir, root, cwd) = setup(SCRIPT);
        let prompter = ScriptedPrompter::with_confirms(&[true, false]);

        let outcome =
            init_instance(&prompter, &root, "rust", &cwd, "demo", InitDecisions::default())
                .unwrap();

        assert_eq!(outcome.script, ScriptStep::Run);
        assert_eq!(outcome.commit, CommitStep::Skipped);
        assert_eq!(prompter.asked_count(), 2);
        let repo = Repository::open(cwd.join("demo")).unwrap();
        assert!(is_dirty(&repo).unwrap());
    }

    #[test]
    fn test_skipped_script_leaves_clean_clone() {
        let (_temp_dir, root, cwd) = setup(SCRIPT);
        let prompter = ScriptedPrompter::new();
        let decisions = InitDecisions { run: Some(false), commit: None };

        let outcome = init_instance(&prompter, &root, "rust", &cwd, "demo", decisions).unwrap();

        assert_eq!(outcome.script, ScriptStep::Skipped);
        assert_eq!(outcome.commit, CommitStep::NotNeeded);
        assert_eq!(prompter.asked_count(), 0);
        assert!(!cwd.join("demo/name.txt").exists());
    }

    #[test]
    fn test_failing_script_still_reaches_commit_step() {
        let (_temp_dir, root, cwd) = setup("#!/bin/sh\necho partial > partial.txt\nexit 3\n");
        let prompter = ScriptedPrompter::new();
        let decisions = InitDecisions { run: Some(true), commit: Some(true) };

        let outcome = init_instance(&prompter, &root, "rust", &cwd, "demo", decisions).unwrap();

        assert_eq!(outcome.script, ScriptStep::Run);
        assert_eq!(outcome.commit, CommitStep::Committed);
    }

    #[test]
    fn test_commit_records_deletions() {
        let (_temp_dir, root, cwd) = setup("#!/bin/sh\nrm README.md\n");
        let decisions = InitDecisions { run: Some(true), commit: Some(true) };

        init_instance(&ScriptedPrompter::new(), &root, "rust", &cwd, "demo", decisions)
            .unwrap();

        let repo = Repository::open(cwd.join("demo")).unwrap();
        assert!(!is_dirty(&repo).unwrap());
        let tree = repo.head().unwrap().peel_to_tree().unwrap();
        assert!(tree.get_name("README.md").is_none());
        assert!(tree.get_path(std::path::Path::new(".tplt/init")).is_ok());
    }
}
