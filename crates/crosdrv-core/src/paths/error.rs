//! Path-related error types.
//!
//! Provides semantic errors for boundary resolution without exposing
//! adapter-specific concerns. "Not found" is deliberately absent: a walk
//! that finds no marker returns `Ok(None)`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path normalization and boundary resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// The resolver only accepts absolute paths.
    #[error("Path {0} is not absolute")]
    NotAbsolute(PathBuf),

    /// The starting path could not be probed, so the walk cannot tell
    /// whether a boundary exists.
    #[error("Path {path} is inaccessible: {reason}")]
    Inaccessible { path: PathBuf, reason: String },

    /// The walk was cancelled before it completed.
    #[error("Resolution of {0} was cancelled")]
    Cancelled(PathBuf),

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}

impl PathError {
    /// The path the error refers to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NotAbsolute(path) | Self::Cancelled(path) | Self::Inaccessible { path, .. } => {
                Some(path)
            }
            Self::EmptyPath | Self::CurrentDirError(_) => None,
        }
    }
}
