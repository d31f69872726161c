//! Resolution of the template root.
//!
//! The root is taken from `--path` when given. Otherwise it is the
//! `tplt` subdirectory of `$XDG_TEMPLATES_DIR`, falling back to the
//! platform templates directory and finally to `~/Templates`.

use crate::constants::{TEMPLATES_DIR_ENV, TEMPLATES_SUBDIR};
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
pub fn expand_home<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Computes the template root from an explicit override and the value of
/// the templates environment variable.
pub fn resolve_templates_root(
    explicit: Option<&Path>,
    env_value: Option<&str>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(expand_home(path));
    }

    let parent = match env_value.filter(|v| !v.is_empty()) {
        Some(value) => expand_home(value),
        None => dirs::template_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Templates")))
            .ok_or_else(|| {
                Error::ConfigError(format!(
                    "cannot locate a templates directory, set {TEMPLATES_DIR_ENV} or pass --path"
                ))
            })?,
    };

    Ok(parent.join(TEMPLATES_SUBDIR))
}

/// Resolves the template root using the process environment.
pub fn templates_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let env_value = std::env::var(TEMPLATES_DIR_ENV).ok();
    let root = resolve_templates_root(explicit, env_value.as_deref())?;
    debug!("Template root resolved to '{}'.", root.display());
    Ok(root)
}
