//! Sentinel markers that identify boundary directories.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ports::EntryKind;
use crate::settings::SettingsError;

/// Marker that identifies a ChromiumOS chroot root.
pub const DEFAULT_CHROOT_MARKER: &str = "etc/cros_chroot_version";

/// Markers that identify a ChromiumOS source checkout root.
///
/// A checkout carries a `repo` manifest directory or hosts the chroot itself.
pub const DEFAULT_SOURCE_MARKERS: [&str; 2] = [".repo/", "chroot/etc/cros_chroot_version"];

/// Which boundary a marker set describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    /// Root of a sandboxed build environment.
    Chroot,
    /// Root of a source checkout.
    SourceRoot,
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chroot => f.write_str("chroot"),
            Self::SourceRoot => f.write_str("source root"),
        }
    }
}

/// What kind of entry a marker must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerKind {
    #[default]
    Any,
    Directory,
}

impl MarkerKind {
    /// Whether a probed entry satisfies this kind.
    pub const fn accepts(self, entry: EntryKind) -> bool {
        match (self, entry) {
            (_, EntryKind::Missing) | (Self::Directory, EntryKind::File) => false,
            (Self::Any, _) | (Self::Directory, EntryKind::Directory) => true,
        }
    }
}

/// A well-known relative path whose presence marks a boundary directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    relative: PathBuf,
    kind: MarkerKind,
}

impl Marker {
    /// Parse a marker from its textual form.
    ///
    /// A trailing `/` requires the marker to be a directory. The path must be
    /// relative and may not contain `..`.
    pub fn parse(raw: &str) -> Result<Self, SettingsError> {
        let trimmed = raw.trim();
        let (body, kind) = match trimmed.strip_suffix('/') {
            Some(body) => (body, MarkerKind::Directory),
            None => (trimmed, MarkerKind::Any),
        };
        if body.is_empty() {
            return Err(SettingsError::InvalidMarker {
                marker: raw.to_string(),
                reason: "marker cannot be empty".to_string(),
            });
        }

        let relative = PathBuf::from(body);
        let mut named = false;
        for component in relative.components() {
            match component {
                Component::Normal(_) => named = true,
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(SettingsError::InvalidMarker {
                        marker: raw.to_string(),
                        reason: "marker may not contain '..'".to_string(),
                    });
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(SettingsError::InvalidMarker {
                        marker: raw.to_string(),
                        reason: "marker must be a relative path".to_string(),
                    });
                }
            }
        }
        // `.` alone would match every directory.
        if !named {
            return Err(SettingsError::InvalidMarker {
                marker: raw.to_string(),
                reason: "marker must name an entry".to_string(),
            });
        }

        Ok(Self { relative, kind })
    }

    /// Marker satisfied by any entry type. `relative` must already be valid.
    pub(crate) fn any(relative: impl Into<PathBuf>) -> Self {
        Self {
            relative: relative.into(),
            kind: MarkerKind::Any,
        }
    }

    /// Marker that must be a directory. `relative` must already be valid.
    pub(crate) fn directory(relative: impl Into<PathBuf>) -> Self {
        Self {
            relative: relative.into(),
            kind: MarkerKind::Directory,
        }
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    pub const fn kind(&self) -> MarkerKind {
        self.kind
    }

    /// Location of this marker inside `dir`.
    pub fn within(&self, dir: &Path) -> PathBuf {
        dir.join(&self.relative)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.relative.display())?;
        if self.kind == MarkerKind::Directory {
            f.write_str("/")?;
        }
        Ok(())
    }
}

/// Ordered markers for one boundary kind. Any present marker matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    kind: BoundaryKind,
    markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn new(kind: BoundaryKind, markers: Vec<Marker>) -> Result<Self, SettingsError> {
        if markers.is_empty() {
            return Err(SettingsError::NoMarkers(kind));
        }
        Ok(Self { kind, markers })
    }

    /// Parse textual markers into a set.
    pub fn parse<S: AsRef<str>>(kind: BoundaryKind, raw: &[S]) -> Result<Self, SettingsError> {
        let markers = raw
            .iter()
            .map(|m| Marker::parse(m.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(kind, markers)
    }

    pub fn default_chroot() -> Self {
        Self {
            kind: BoundaryKind::Chroot,
            markers: vec![Marker::any(DEFAULT_CHROOT_MARKER)],
        }
    }

    pub fn default_source_root() -> Self {
        Self {
            kind: BoundaryKind::SourceRoot,
            markers: vec![
                Marker::directory(".repo"),
                Marker::any("chroot/etc/cros_chroot_version"),
            ],
        }
    }

    pub const fn kind(&self) -> BoundaryKind {
        self.kind
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}
