use std::io;
use thiserror::Error;

/// Error type for gcvit operations.
#[derive(Error, Debug)]
pub enum GcvitError {
    /// Unknown dataset or sample, malformed specifier, or an otherwise
    /// unusable request. Surfaced before any output is produced.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed input from the variant source mid-stream.
    #[error("error reading variant stream (line {line}): {msg}")]
    Read { line: u64, msg: String },

    /// Feature sink failure. Propagated, never retried.
    #[error("error writing feature: {0}")]
    Write(String),
}

/// Result type alias for gcvit operations.
pub type Result<T> = std::result::Result<T, GcvitError>;
