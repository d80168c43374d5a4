//! OS accessor backed by the process environment and the account database.

use std::env;
use std::path::{MAIN_SEPARATOR_STR, PathBuf};

use crosdrv_core::ports::{OsError, OsPort};
use tracing::{debug, warn};

/// Environment variables that carry the login name, in lookup order.
const USER_VARS: [&str; 3] = ["USER", "LOGNAME", "USERNAME"];

/// Default implementation of `OsPort`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOs;

impl SystemOs {
    pub const fn new() -> Self {
        Self
    }
}

impl OsPort for SystemOs {
    fn homedir(&self) -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| {
            warn!("home directory unknown; using filesystem root");
            PathBuf::from(MAIN_SEPARATOR_STR)
        })
    }

    /// Login name from the environment, else from the account database.
    fn username(&self) -> Result<String, OsError> {
        USER_VARS
            .iter()
            .find_map(|var| env::var(var).ok().filter(|v| !v.trim().is_empty()))
            .or_else(account_username)
            .ok_or_else(|| {
                OsError::UnknownUser(format!(
                    "none of {} is set and the account database has no entry",
                    USER_VARS.join(", ")
                ))
            })
    }
}

/// Name of the real user id's passwd entry.
#[cfg(unix)]
fn account_username() -> Option<String> {
    use nix::unistd::{User, getuid};

    match User::from_uid(getuid()) {
        Ok(user) => user.map(|u| u.name),
        Err(err) => {
            debug!(error = %err, "passwd lookup failed");
            None
        }
    }
}

#[cfg(not(unix))]
fn account_username() -> Option<String> {
    debug!("no account database on this platform");
    None
}
