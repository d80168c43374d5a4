//! Upward ancestor walk shared by every boundary lookup.
//!
//! The walk is strictly sequential: one probe at a time, nearest ancestor
//! first, stopping at the first directory that carries a marker. Only the
//! marker set differs between lookups.

use std::io;
use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::error::PathError;
use super::marker::{Marker, MarkerSet};
use super::normalize::lexical_absolute;
use crate::ports::{EntryKind, FsProbePort};

/// Outcome of probing one candidate directory.
enum DirProbe<'a> {
    Match(&'a Marker),
    NoMatch,
    Fault(io::Error),
}

/// Find the nearest ancestor of `path` (inclusive) that carries one of `markers`.
pub(crate) async fn find_nearest_ancestor(
    probe: &dyn FsProbePort,
    path: &Path,
    markers: &MarkerSet,
    cancel: Option<&CancellationToken>,
) -> Result<Option<PathBuf>, PathError> {
    let requested = lexical_absolute(path)?;
    let start = start_dir(probe, &requested, cancel).await?;

    for (depth, dir) in start.ancestors().enumerate() {
        match probe_dir(probe, dir, markers, cancel, &requested).await? {
            DirProbe::Match(marker) => {
                debug!(
                    kind = %markers.kind(),
                    dir = %dir.display(),
                    %marker,
                    depth,
                    "boundary found"
                );
                return Ok(Some(dir.to_path_buf()));
            }
            DirProbe::NoMatch => {}
            DirProbe::Fault(err) if depth == 0 => {
                return Err(PathError::Inaccessible {
                    path: dir.to_path_buf(),
                    reason: err.to_string(),
                });
            }
            DirProbe::Fault(err) => {
                warn!(
                    kind = %markers.kind(),
                    dir = %dir.display(),
                    error = %err,
                    "skipping unreadable ancestor"
                );
            }
        }
    }

    debug!(kind = %markers.kind(), path = %requested.display(), "no boundary found");
    Ok(None)
}

/// Directory the walk starts from: the path itself unless it is a file.
///
/// A path that does not exist is walked lexically from itself.
async fn start_dir(
    probe: &dyn FsProbePort,
    requested: &Path,
    cancel: Option<&CancellationToken>,
) -> Result<PathBuf, PathError> {
    match stat(probe, requested, cancel, requested).await? {
        Ok(EntryKind::File) => Ok(requested
            .parent()
            .map_or_else(|| requested.to_path_buf(), Path::to_path_buf)),
        Ok(EntryKind::Directory | EntryKind::Missing) => Ok(requested.to_path_buf()),
        Err(err) => Err(PathError::Inaccessible {
            path: requested.to_path_buf(),
            reason: err.to_string(),
        }),
    }
}

async fn probe_dir<'m>(
    probe: &dyn FsProbePort,
    dir: &Path,
    markers: &'m MarkerSet,
    cancel: Option<&CancellationToken>,
    requested: &Path,
) -> Result<DirProbe<'m>, PathError> {
    let mut fault = None;
    for marker in markers.markers() {
        match stat(probe, &marker.within(dir), cancel, requested).await? {
            Ok(entry) if marker.kind().accepts(entry) => return Ok(DirProbe::Match(marker)),
            Ok(_) => {}
            Err(err) => {
                // Keep probing: a later marker may still be readable.
                fault.get_or_insert(err);
            }
        }
    }
    Ok(fault.map_or(DirProbe::NoMatch, DirProbe::Fault))
}

/// One probe, abandoned as soon as `cancel` fires.
///
/// The outer `Result` carries cancellation; the inner one is the probe's own
/// I/O outcome.
async fn stat(
    probe: &dyn FsProbePort,
    path: &Path,
    cancel: Option<&CancellationToken>,
    requested: &Path,
) -> Result<io::Result<EntryKind>, PathError> {
    let Some(token) = cancel else {
        return Ok(probe.stat(path).await);
    };
    if token.is_cancelled() {
        return Err(PathError::Cancelled(requested.to_path_buf()));
    }
    tokio::select! {
        biased;
        () = token.cancelled() => Err(PathError::Cancelled(requested.to_path_buf())),
        result = probe.stat(path) => Ok(result),
    }
}
