//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from the core error enums to exit codes and user-facing messages.

use std::path::PathBuf;

use crosdrv_core::{BoundaryKind, OsError, PathError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument error (empty or unusable path).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (permission denied, unreadable directory, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The lookup was cancelled before it finished.
    #[error("Cancelled: {0}")]
    Cancelled(String),

    /// No boundary encloses the requested path.
    #[error("No {kind} found above {}", .path.display())]
    NotFound { kind: BoundaryKind, path: PathBuf },
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error, or no boundary found
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    /// - 130: Interrupted
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) | CliError::NotFound { .. } => 1,
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
            CliError::Cancelled(_) => 130,
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::EmptyPath | PathError::NotAbsolute(_) => CliError::Arguments(err.to_string()),
            PathError::Inaccessible { .. } | PathError::CurrentDirError(_) => {
                CliError::Io(err.to_string())
            }
            PathError::Cancelled(_) => CliError::Cancelled(err.to_string()),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<OsError> for CliError {
    fn from(err: OsError) -> Self {
        CliError::Core(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}
