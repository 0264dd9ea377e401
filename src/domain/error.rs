use std::io;

use thiserror::Error;

/// Library-wide error type for repurge operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Repository identifier is invalid.
    #[error("Invalid repository '{0}': expected <owner>/<name>")]
    InvalidRepoId(String),

    /// Invalid invocation or environment issue.
    #[error("{0}")]
    Validation(String),

    /// An external CLI tool could not be spawned or exited non-zero.
    #[error("{tool} error: {error}")]
    ExternalToolError { tool: String, error: String },

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Unexpected output shape from an external tool.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}
