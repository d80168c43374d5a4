//! Chroot and source checkout resolution.
//!
//! `PathResolver` owns the two marker sets and delegates every lookup to the
//! shared ancestor walk. It holds no state besides its configuration, so a
//! single instance can serve any number of concurrent lookups.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use super::error::PathError;
use super::marker::{BoundaryKind, MarkerSet};
use super::walk::find_nearest_ancestor;
use crate::ports::{CrosPort, FsProbePort};
use crate::settings::{ResolverSettings, SettingsError};

/// Both boundaries of one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Boundaries {
    /// Nearest enclosing chroot root, if any.
    pub chroot: Option<PathBuf>,
    /// Nearest enclosing source checkout root, if any.
    pub source_dir: Option<PathBuf>,
}

impl fmt::Display for Boundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show(path: Option<&PathBuf>) -> String {
            path.map_or_else(|| "<none>".to_string(), |p| p.display().to_string())
        }
        writeln!(f, "chroot = {}", show(self.chroot.as_ref()))?;
        write!(f, "source_dir = {}", show(self.source_dir.as_ref()))
    }
}

/// Resolves chroot and source checkout boundaries by walking up from a path.
#[derive(Clone)]
pub struct PathResolver {
    probe: Arc<dyn FsProbePort>,
    chroot: MarkerSet,
    source: MarkerSet,
}

impl fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathResolver")
            .field("chroot", &self.chroot)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl PathResolver {
    /// Resolver with the default ChromiumOS markers.
    pub fn new(probe: Arc<dyn FsProbePort>) -> Self {
        Self {
            probe,
            chroot: MarkerSet::default_chroot(),
            source: MarkerSet::default_source_root(),
        }
    }

    /// Resolver with markers taken from settings.
    pub fn with_settings(
        probe: Arc<dyn FsProbePort>,
        settings: &ResolverSettings,
    ) -> Result<Self, SettingsError> {
        let (chroot, source) = settings.marker_sets()?;
        Ok(Self::with_markers(probe, chroot, source))
    }

    pub fn with_markers(probe: Arc<dyn FsProbePort>, chroot: MarkerSet, source: MarkerSet) -> Self {
        Self {
            probe,
            chroot,
            source,
        }
    }

    pub const fn markers(&self, kind: BoundaryKind) -> &MarkerSet {
        match kind {
            BoundaryKind::Chroot => &self.chroot,
            BoundaryKind::SourceRoot => &self.source,
        }
    }

    /// Nearest ancestor of `path` (inclusive) carrying a `kind` marker.
    pub async fn resolve(
        &self,
        kind: BoundaryKind,
        path: &Path,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<PathBuf>, PathError> {
        find_nearest_ancestor(self.probe.as_ref(), path, self.markers(kind), cancel).await
    }

    /// Like [`CrosPort::find_chroot`], stopping with `PathError::Cancelled`
    /// once `cancel` fires.
    pub async fn find_chroot_cancellable(
        &self,
        path: &Path,
        cancel: &CancellationToken,
    ) -> Result<Option<PathBuf>, PathError> {
        self.resolve(BoundaryKind::Chroot, path, Some(cancel)).await
    }

    /// Like [`CrosPort::find_source_dir`], stopping with `PathError::Cancelled`
    /// once `cancel` fires.
    pub async fn find_source_dir_cancellable(
        &self,
        path: &Path,
        cancel: &CancellationToken,
    ) -> Result<Option<PathBuf>, PathError> {
        self.resolve(BoundaryKind::SourceRoot, path, Some(cancel)).await
    }

    /// Resolve both boundaries of `path`.
    ///
    /// The two walks run concurrently with each other; each one still probes
    /// its ancestors in order.
    pub async fn locate(&self, path: &Path) -> Result<Boundaries, PathError> {
        self.locate_with(path, None).await
    }

    /// Like [`PathResolver::locate`], stopping both walks with
    /// `PathError::Cancelled` once `cancel` fires.
    pub async fn locate_cancellable(
        &self,
        path: &Path,
        cancel: &CancellationToken,
    ) -> Result<Boundaries, PathError> {
        self.locate_with(path, Some(cancel)).await
    }

    async fn locate_with(
        &self,
        path: &Path,
        cancel: Option<&CancellationToken>,
    ) -> Result<Boundaries, PathError> {
        let (chroot, source_dir) = tokio::try_join!(
            self.resolve(BoundaryKind::Chroot, path, cancel),
            self.resolve(BoundaryKind::SourceRoot, path, cancel),
        )?;
        Ok(Boundaries { chroot, source_dir })
    }
}

#[async_trait]
impl CrosPort for PathResolver {
    async fn find_chroot(&self, path: &Path) -> Result<Option<PathBuf>, PathError> {
        self.resolve(BoundaryKind::Chroot, path, None).await
    }

    async fn find_source_dir(&self, path: &Path) -> Result<Option<PathBuf>, PathError> {
        self.resolve(BoundaryKind::SourceRoot, path, None).await
    }
}
