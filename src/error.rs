//! Error handling for tplt.
//! Defines the error type and result alias used throughout the application.

use thiserror::Error;

/// Errors that can occur while managing templates and instances.
///
/// Every error is terminal for the current invocation: nothing is retried,
/// the message is printed and the process exits with a non-zero status.
#[derive(Error, Debug)]
pub enum Error {
    /// The target path is present where it must be absent.
    #[error("'{path}' already exists.")]
    AlreadyExistsError { path: String },

    /// An expected path is absent (template, instance root, ...).
    #[error("'{path}' does not exist.")]
    NotFoundError { path: String },

    /// The answer file is missing or is not a JSON object of strings.
    #[error("Answer file '{path}' could not be loaded: {reason}.")]
    AnswerFileError { path: String, reason: String },

    /// The command line named no subcommand.
    #[error("No command specified.")]
    NoCommandError,

    /// Malformed or insufficient command line input.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// A file could not be rewritten during substitution.
    #[error("Failed to rewrite '{path}': {source}.")]
    RewriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors from the version control collaborator (init, clone, commit).
    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// Terminal interaction failed.
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::PromptError(err.to_string())
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
