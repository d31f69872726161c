//! Filesystem preconditions checked before any mutation.

use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Creates `path` (and its parents) when missing and returns it.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("Creating directory '{}'.", path.display());
        std::fs::create_dir_all(path)?;
    }
    Ok(path.to_path_buf())
}

/// Fails with [`Error::AlreadyExistsError`] when `path` exists.
pub fn ensure_absent<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Err(Error::AlreadyExistsError { path: path.display().to_string() });
    }
    Ok(())
}

/// Fails with [`Error::NotFoundError`] when `path` does not exist.
pub fn ensure_present<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFoundError { path: path.display().to_string() });
    }
    Ok(())
}
