//! Common constants used throughout tplt.

/// Directory inside templates and instances that holds tool metadata.
pub const TOOL_DIR: &str = ".tplt";

/// Initialization script, relative to [`TOOL_DIR`].
pub const INIT_SCRIPT: &str = "init";

/// Default answer file, relative to the instance root.
pub const DEFAULT_QUERY_FILE: &str = ".tplt/query.json";

/// Default token delimiter for `replace`.
pub const DEFAULT_DELIMITER: &str = "&&";

/// Patterns that are always excluded from traversal.
pub const DEFAULT_EXCLUDES: [&str; 2] = ["**/.git", "**/.tplt"];

/// Subdirectory of the platform templates directory that holds templates.
pub const TEMPLATES_SUBDIR: &str = "tplt";

/// Overrides the parent directory of the template root.
pub const TEMPLATES_DIR_ENV: &str = "XDG_TEMPLATES_DIR";

/// Absolute path of the new instance, exported to the init script.
pub const INSTANCE_PATH_ENV: &str = "TPLT_INSTANCE_PATH";

/// Declared name of the new instance, exported to the init script.
pub const INSTANCE_NAME_ENV: &str = "TPLT_INSTANCE_NAME";

/// Message used when committing changes made during `init`.
pub const COMMIT_MESSAGE: &str = "Initialize from template";
