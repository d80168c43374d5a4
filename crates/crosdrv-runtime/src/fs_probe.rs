//! Filesystem probe backed by `tokio::fs`.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use crosdrv_core::ports::{EntryKind, FsProbePort};

/// Default implementation of `FsProbePort`.
///
/// Each probe is a single `metadata` call on tokio's blocking pool, so a walk
/// never blocks the async runtime and never holds a handle between probes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFsProbe;

impl TokioFsProbe {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsProbePort for TokioFsProbe {
    async fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_dir() => Ok(EntryKind::Directory),
            Ok(_) => Ok(EntryKind::File),
            Err(err) if is_absent(&err) => Ok(EntryKind::Missing),
            Err(err) => Err(err),
        }
    }
}

/// Errors that just mean "nothing there".
fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}
