//! Selective traversal of an instance's file tree.

use crate::error::{Error, Result};
use crate::ignore::ExclusionSet;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Anything that yields a finite sequence of file paths.
pub trait FileSource {
    /// Lazily yields file paths; traversal errors are yielded in place.
    fn files(&self) -> Box<dyn Iterator<Item = Result<PathBuf>> + '_>;
}

/// Recursive, lexically ordered walk that prunes excluded entries.
///
/// Only regular files are yielded. Symbolic links are neither followed
/// nor yielded. A missing root yields nothing.
pub struct TreeWalker {
    root: PathBuf,
    exclusions: ExclusionSet,
}

impl TreeWalker {
    pub fn new<P: Into<PathBuf>>(root: P, exclusions: ExclusionSet) -> Self {
        Self { root: root.into(), exclusions }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_excluded(&self, path: &Path) -> bool {
        match path.strip_prefix(&self.root) {
            // The root itself is never excluded.
            Ok(relative) if !relative.as_os_str().is_empty() => {
                let excluded = self.exclusions.is_match(relative);
                if excluded {
                    debug!("Skipping excluded path '{}'.", relative.display());
                }
                excluded
            }
            _ => false,
        }
    }
}

impl FileSource for TreeWalker {
    fn files(&self) -> Box<dyn Iterator<Item = Result<PathBuf>> + '_> {
        if !self.root.exists() {
            debug!("Walk root '{}' does not exist.", self.root.display());
            return Box::new(std::iter::empty());
        }

        let entries = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.is_excluded(entry.path()));

        Box::new(entries.filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_file() => Some(Ok(entry.into_path())),
            Ok(entry) if entry.path_is_symlink() => {
                debug!("Skipping symbolic link '{}'.", entry.path().display());
                None
            }
            Ok(_) => None,
            Err(e) => Some(Err(Error::IoError(e.into()))),
        }))
    }
}
