use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse answers file. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    /// The answers file decoded to valid JSON, but not to an object.
    #[error("Answers file '{path}' must contain a JSON object.")]
    AnswersFileNotObject { path: String },

    /// A known field was given a value of the wrong shape.
    #[error("Invalid value for '{field}': expected {expected}, found {found}.")]
    InvalidAnswer { field: String, expected: String, found: String },

    #[error("Unknown answer field: '{0}'.")]
    UnknownField(String),
}

/// Convenience type alias for Results with the crate error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

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
