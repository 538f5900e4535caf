use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Terminal interaction failed. Original error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("No configuration file found at '{path}'. Tried: {config_files}.")]
    ConfigNotFound { path: String, config_files: String },

    #[error("Configuration validation failed: {0}.")]
    ConfigValidation(String),

    /// `open` was called on a busy prompt configured to reject contention.
    #[error("Cannot open the '{kind}' prompt: another request is still pending.")]
    PromptBusy { kind: &'static str },

    /// A newer request took over the prompt before this one was answered.
    #[error("The '{kind}' prompt was superseded by a newer request.")]
    PromptSuperseded { kind: &'static str },

    /// The prompt service went away while the request was pending.
    #[error("The '{kind}' prompt was closed before an answer was chosen.")]
    PromptClosed { kind: &'static str },

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with larder's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
