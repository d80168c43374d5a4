//! Filesystem probe port.
//!
//! The resolver never touches the filesystem directly. Every existence check
//! goes through this port so walks can be tested against an in-memory tree
//! and so adapters decide how blocking I/O is scheduled.
//!
//! # Design Notes
//!
//! - One probe is one self-contained `stat`; no handle outlives the call
//! - "Not found" is a value (`EntryKind::Missing`), not an error
//! - Any other I/O failure is returned as `Err` and classified by the caller

use std::io;
use std::path::Path;

use async_trait::async_trait;

/// What a probed path turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// A regular file, or any other non-directory entry.
    File,
    /// Nothing exists at the path (including a non-directory in the prefix).
    Missing,
}

/// Port for read-only filesystem probes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FsProbePort: Send + Sync {
    /// Report what exists at `path`, following symlinks.
    ///
    /// Implementations map "not found" and "not a directory" to
    /// `Ok(EntryKind::Missing)` and return every other failure as `Err`.
    async fn stat(&self, path: &Path) -> io::Result<EntryKind>;
}
