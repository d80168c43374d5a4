//! Operating-system accessor port.
//!
//! Pass-through access to per-user facts owned by the host OS.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from OS queries that are allowed to fail.
#[derive(Debug, Error)]
pub enum OsError {
    /// The login name of the current user could not be determined.
    #[error("Cannot determine current user: {0}")]
    UnknownUser(String),
}

/// Port for reading facts about the current user.
#[cfg_attr(test, mockall::automock)]
pub trait OsPort: Send + Sync {
    /// Home directory of the current user. Never fails.
    fn homedir(&self) -> PathBuf;

    /// Login name of the current user.
    fn username(&self) -> Result<String, OsError>;
}
