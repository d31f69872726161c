//! Post-clone initialization script handling.
//! An instance may carry an executable at `.tplt/init`; `init` offers to
//! run it right after cloning.

use crate::constants::{INIT_SCRIPT, INSTANCE_NAME_ENV, INSTANCE_PATH_ENV, TOOL_DIR};
use crate::error::Result;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Returns the location of the init script inside `instance_dir`.
pub fn get_init_script<P: AsRef<Path>>(instance_dir: P) -> PathBuf {
    instance_dir.as_ref().join(TOOL_DIR).join(INIT_SCRIPT)
}

/// Runs the init script inside the instance directory.
///
/// The script inherits the environment and additionally receives the
/// absolute instance path and the declared instance name. Its exit status
/// is returned and logged but never turned into an error.
///
/// # Errors
/// * `Error::IoError` if the script cannot be started
pub fn run_init_script(
    script_path: &Path,
    instance_dir: &Path,
    instance_name: &str,
) -> Result<ExitStatus> {
    let instance_dir = instance_dir.canonicalize()?;

    debug!(
        "Running '{}' in '{}'.",
        script_path.display(),
        instance_dir.display()
    );

    let status = Command::new(script_path)
        .current_dir(&instance_dir)
        .env(INSTANCE_PATH_ENV, &instance_dir)
        .env(INSTANCE_NAME_ENV, instance_name)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        warn!("Init script exited with {}.", status);
    }
    Ok(status)
}
