//! Error types for the release tools
//!
//! Every failure a bump or tag run can hit maps onto one variant here.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the release tools
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// The build configuration file does not exist or cannot be read
    #[error("Build configuration file not found: {}", path.display())]
    MissingConfigFile {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A required environment variable is unset or empty
    #[error("Environment variable {name} is not set")]
    MissingEnvironmentVariable { name: String },

    /// The supplied build number is not a positive integer
    #[error("Invalid build number '{value}': expected a positive integer")]
    InvalidBuildNumber { value: String },

    /// A declaration is absent, duplicated or carries an unusable value
    #[error("Malformed {key} declaration: {message}")]
    MalformedDeclaration { key: String, message: String },

    /// A version-control command could not be started or exited non-zero
    #[error("Tag operation failed: {command} (exit code {exit_code:?}): {stderr}")]
    TagOperationFailed {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// File system operation errors
    #[error("File system error: {operation} failed on {}", path.display())]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ReleaseError {
    /// Create a missing configuration file error
    pub fn missing_config_file<P: Into<PathBuf>>(path: P, source: Option<std::io::Error>) -> Self {
        Self::MissingConfigFile {
            path: path.into(),
            source,
        }
    }

    /// Create a missing environment variable error
    pub fn missing_env(name: impl Into<String>) -> Self {
        Self::MissingEnvironmentVariable { name: name.into() }
    }

    /// Create an invalid build number error
    pub fn invalid_build_number(value: impl Into<String>) -> Self {
        Self::InvalidBuildNumber {
            value: value.into(),
        }
    }

    /// Create a malformed declaration error
    pub fn malformed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedDeclaration {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a tag operation error
    pub fn tag_operation(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::TagOperationFailed {
            command: command.into(),
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

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

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Map a read failure on the build configuration file.
    ///
    /// Anything the OS reports while opening the file counts as a missing
    /// configuration; the path did not resolve to something readable.
    pub fn from_config_read<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::missing_config_file(path, Some(source))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ReleaseError>;
