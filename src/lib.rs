//! tplt manages project templates stored as git repositories.
//! It creates and clones templates, runs their init scripts, collects
//! answers to template questions and substitutes them into the file tree.

/// Question collection and answer file persistence
pub mod answers;

/// Command-line interface module for the tplt application
pub mod cli;

/// Subcommand dispatch and handlers
pub mod commands;

/// Template root resolution
pub mod config;

/// Well-known paths, names and defaults
pub mod constants;

/// Error types and handling for the tplt application
pub mod error;

/// Post-clone init script execution (.tplt/init)
pub mod hooks;

/// Exclusion glob patterns
pub mod ignore;

pub mod logger;

/// Filesystem preconditions
pub mod paths;

/// Token substitution over a file tree
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Git operations backing templates and instances
pub mod repo;

/// Template listing, creation and instantiation
pub mod template;

/// File tree traversal with exclusions
pub mod walker;
