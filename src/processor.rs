//! Token substitution over an instance's file tree.
//!
//! Every answer `NAME` produces the literal token `<delim>NAME<delim>`.
//! All tokens are combined into a single alternation so each line is
//! scanned once, left to right, without overlapping matches.
//!
//! Rewriting is destructive: files are replaced in place and no backup is
//! kept. Each file is transformed in memory, written to a temporary file
//! next to it and renamed over the original. A failure stops the run and
//! leaves already rewritten files as they are.

use crate::answers::{load_answers, AnswerMap};
use crate::error::{Error, Result};
use crate::ignore::ExclusionSet;
use crate::walker::{FileSource, TreeWalker};
use log::{debug, info};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Totals reported after a substitution pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceSummary {
    pub files: usize,
    pub replacements: usize,
}

/// Replaces delimiter-bounded tokens with their answers.
pub struct Substitutor {
    /// `None` when there are no answers; files are then rewritten unchanged.
    pattern: Option<Regex>,
    values: HashMap<String, String>,
}

impl Substitutor {
    /// Compiles the token pattern for `answers`.
    ///
    /// Tokens whose escaped forms are prefixes of one another are not
    /// disambiguated; the first declared alternative wins.
    pub fn new(answers: &AnswerMap, delimiter: &str) -> Result<Self> {
        let mut values = HashMap::with_capacity(answers.len());
        let mut alternatives = Vec::with_capacity(answers.len());

        for (name, value) in answers {
            let token = format!("{delimiter}{name}{delimiter}");
            alternatives.push(regex::escape(&token));
            values.insert(token, value.clone());
        }

        let pattern = if alternatives.is_empty() {
            None
        } else {
            let source = alternatives.join("|");
            debug!("Token pattern: {}", source);
            Some(
                Regex::new(&source)
                    .map_err(|e| Error::ConfigError(format!("invalid token pattern: {e}")))?,
            )
        };

        Ok(Self { pattern, values })
    }

    /// Replaces every token in `line`, returning the result and the number
    /// of replacements made.
    pub fn replace_line<'a>(&self, line: &'a str) -> (Cow<'a, str>, usize) {
        let Some(pattern) = &self.pattern else {
            return (Cow::Borrowed(line), 0);
        };

        let mut count = 0;
        let replaced = pattern.replace_all(line, |caps: &Captures| {
            count += 1;
            self.values.get(&caps[0]).cloned().unwrap_or_else(|| caps[0].to_string())
        });
        (replaced, count)
    }

    /// Transforms `content` line by line, keeping line terminators intact.
    pub fn replace_text(&self, content: &str) -> (String, usize) {
        let mut output = String::with_capacity(content.len());
        let mut count = 0;
        for line in content.split_inclusive('\n') {
            let (replaced, n) = self.replace_line(line);
            output.push_str(&replaced);
            count += n;
        }
        (output, count)
    }

    /// Rewrites a single file in its entirety.
    ///
    /// # Errors
    /// * `Error::RewriteError` if the file is not valid UTF-8 text, is
    ///   read-only, or any read/write fails
    pub fn rewrite_file(&self, path: &Path) -> Result<usize> {
        let rewrite_error =
            |source: io::Error| Error::RewriteError { path: path.display().to_string(), source };

        let permissions = fs::metadata(path).map_err(rewrite_error)?.permissions();
        if permissions.readonly() {
            return Err(rewrite_error(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "file is read-only",
            )));
        }

        let bytes = fs::read(path).map_err(rewrite_error)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| rewrite_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        let (output, count) = self.replace_text(&content);

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(parent).map_err(rewrite_error)?;
        staged.write_all(output.as_bytes()).map_err(rewrite_error)?;
        staged.as_file().sync_all().map_err(rewrite_error)?;
        fs::set_permissions(staged.path(), permissions).map_err(rewrite_error)?;
        staged.persist(path).map_err(|e| rewrite_error(e.error))?;

        debug!("Rewrote '{}' ({} replacement(s)).", path.display(), count);
        Ok(count)
    }

    /// Rewrites every file produced by `source`, stopping at the first error.
    pub fn apply(&self, source: &dyn FileSource) -> Result<ReplaceSummary> {
        let mut summary = ReplaceSummary::default();
        for file in source.files() {
            let file = file?;
            summary.replacements += self.rewrite_file(&file)?;
            summary.files += 1;
        }
        Ok(summary)
    }
}

/// Applies the answers stored in `answer_file` to the tree under `root`.
///
/// A relative `answer_file` is resolved against `root`.
///
/// # Errors
/// * `Error::AnswerFileError` if the answer file is missing or malformed
/// * `Error::ConfigError` if an exclude pattern is invalid
/// * `Error::RewriteError` / `Error::IoError` on the first failing file
pub fn replace<P, Q, S>(
    root: P,
    answer_file: Q,
    delimiter: &str,
    excludes: &[S],
) -> Result<ReplaceSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: AsRef<str>,
{
    let root = root.as_ref();
    let answers = load_answers(root.join(answer_file))?;
    let substitutor = Substitutor::new(&answers, delimiter)?;
    let walker = TreeWalker::new(root, ExclusionSet::new(excludes)?);

    let summary = substitutor.apply(&walker)?;
    info!(
        "Replaced {} token(s) across {} file(s) under '{}'.",
        summary.replacements,
        summary.files,
        root.display()
    );
    Ok(summary)
}
