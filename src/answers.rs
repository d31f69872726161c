//! Question collection and answer file persistence.
//!
//! Answers are stored as a JSON object mapping question names to strings,
//! keeping the order in which they were declared.

use crate::error::{Error, Result};
use crate::paths::ensure_absent;
use crate::prompt::Prompter;
use indexmap::IndexMap;
use log::{debug, info};
use std::path::Path;

/// Ordered mapping from question name to answer.
pub type AnswerMap = IndexMap<String, String>;

/// Splits a `name=value` argument at the first `=`.
///
/// # Errors
/// * `Error::ConfigError` if there is no `=` or the name is empty
pub fn parse_pair(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        Some(_) => Err(Error::ConfigError(format!("'{raw}' has an empty name"))),
        None => Err(Error::ConfigError(format!("'{raw}' is not in the form name=value"))),
    }
}

/// Parses a list of `name=value` arguments, later duplicates win.
pub fn parse_pairs<S: AsRef<str>>(raw: &[S]) -> Result<IndexMap<String, String>> {
    raw.iter().map(|pair| parse_pair(pair.as_ref())).collect()
}

/// Reads a previously persisted answer map.
///
/// # Errors
/// * `Error::AnswerFileError` if the file is missing or is not a JSON
///   object whose values are all strings
pub fn load_answers<P: AsRef<Path>>(path: P) -> Result<AnswerMap> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::AnswerFileError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| Error::AnswerFileError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Writes the answer map, creating parent directories as needed.
pub fn save_answers<P: AsRef<Path>>(path: P, answers: &AnswerMap) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(answers)
        .map_err(|e| Error::ConfigError(format!("failed to serialize answers: {e}")))?;
    std::fs::write(path, content + "\n")?;
    debug!("Answers written to '{}'.", path.display());
    Ok(())
}

/// Collects answers and persists them to `output`.
///
/// Defaults seed the map, then every question is asked in declaration
/// order and the typed response replaces whatever was stored under its
/// name. The file is written once, after the last question.
///
/// # Errors
/// * `Error::ConfigError` if both `questions` and `defaults` are empty
/// * `Error::AlreadyExistsError` if `output` already exists
pub fn query<P: AsRef<Path>>(
    prompt: &dyn Prompter,
    questions: &IndexMap<String, String>,
    defaults: &IndexMap<String, String>,
    output: P,
) -> Result<AnswerMap> {
    let output = output.as_ref();
    if questions.is_empty() && defaults.is_empty() {
        return Err(Error::ConfigError(
            "no questions or defaults given, use -q name=question or -d name=default".into(),
        ));
    }
    ensure_absent(output)?;

    let mut answers = defaults.clone();
    for (name, question) in questions {
        let response = prompt.input(question)?;
        answers.insert(name.clone(), response);
    }

    save_answers(output, &answers)?;
    info!("Collected {} answer(s).", answers.len());
    Ok(answers)
}
