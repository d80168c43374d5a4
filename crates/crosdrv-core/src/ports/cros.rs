//! ChromiumOS boundary lookup port.
//!
//! Callers that only need to know "is this file inside a chroot / checkout"
//! depend on this trait rather than on `PathResolver`, so hosts can swap in
//! a remote or fixed implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::paths::PathError;

/// Port for locating chroot and source checkout boundaries.
///
/// Both lookups return `Ok(None)` when no boundary encloses `path`; an `Err`
/// means the lookup could not be completed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrosPort: Send + Sync {
    /// Nearest enclosing chroot root of `path`.
    async fn find_chroot(&self, path: &Path) -> Result<Option<PathBuf>, PathError>;

    /// Nearest enclosing source checkout root of `path`.
    async fn find_source_dir(&self, path: &Path) -> Result<Option<PathBuf>, PathError>;
}
