//! Error types for the release tool
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the release tool
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Process execution errors
    #[error("Process error: {command} failed")]
    Process {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A replacement pattern failed to compile
    #[error("Invalid {name} pattern '{pattern}'")]
    Pattern {
        name: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A required pattern matched nothing in the target file
    #[error("No match for the {rule} pattern in {path}")]
    PatternNotFound { rule: String, path: PathBuf },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ReleaseError {
    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new process error
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            source: None,
        }
    }

    /// Create a new pattern compilation error
    pub fn pattern(name: impl Into<String>, pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            name: name.into(),
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a new missing-match error
    pub fn pattern_not_found<P: Into<PathBuf>>(rule: impl Into<String>, path: P) -> Self {
        Self::PatternNotFound {
            rule: rule.into(),
            path: path.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ReleaseError>;
