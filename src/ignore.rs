//! Exclusion patterns for tree traversal.
//! Paths matching any pattern are skipped, and matching directories are
//! pruned together with everything beneath them.

use crate::constants::DEFAULT_EXCLUDES;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

/// Compiled set of exclusion globs.
///
/// The git directory and the tool metadata directory are always part of
/// the set; user patterns are appended after them.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    patterns: Vec<String>,
    globs: GlobSet,
}

impl ExclusionSet {
    /// Builds a set from the default patterns followed by `extra`.
    ///
    /// A trailing `/` on a user pattern (`vendor/`) is dropped so that it
    /// matches the directory itself, which prunes everything below it.
    ///
    /// # Errors
    /// * `Error::ConfigError` if a pattern is not a valid glob
    pub fn new<I, S>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns: Vec<String> =
            DEFAULT_EXCLUDES.iter().map(|p| p.to_string()).collect();
        patterns.extend(extra.into_iter().map(|p| normalize_pattern(p.as_ref())));

        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            builder.add(Glob::new(pattern).map_err(|e| {
                Error::ConfigError(format!("invalid exclude pattern '{pattern}': {e}"))
            })?);
        }
        let globs = builder
            .build()
            .map_err(|e| Error::ConfigError(format!("exclude patterns failed to compile: {e}")))?;

        debug!("Exclusion patterns: {:?}", patterns);
        Ok(Self { patterns, globs })
    }

    /// Returns `true` if the root-relative `path` is excluded.
    pub fn is_match<P: AsRef<Path>>(&self, path: P) -> bool {
        self.globs.is_match(path.as_ref())
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// Walked paths never end in a separator, so `dir/` must become `dir`.
fn normalize_pattern(pattern: &str) -> String {
    match pattern.trim_end_matches('/') {
        "" => pattern.to_string(),
        trimmed => trimmed.to_string(),
    }
}
