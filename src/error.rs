use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize or parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    /// When an external command has executed but finished with an error.
    #[error("Command '{command}' failed with status: {status}")]
    CommandExecutionError { command: String, status: ExitStatus },

    /// The package manifest is missing or cannot be parsed.
    #[error("Cannot read manifest '{path}': {reason}.")]
    ManifestError { path: String, reason: String },

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Unsupported package manager '{0}'. Expected one of: npm, yarn.")]
    UnknownPackageManager(String),

    /// The first generation step that failed, with the underlying cause.
    #[error("Step '{step}' failed: {source}")]
    StepError {
        step: &'static str,
        #[source]
        source: Box<Error>,
    },
}

/// Convenience type alias for Results with the crate error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps `self` with the name of the generation step it came from.
    pub fn in_step(self, step: &'static str) -> Self {
        Error::StepError { step, source: Box::new(self) }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
