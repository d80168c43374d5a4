//! Resolver settings and validation.
//!
//! Markers are configured as plain strings so they can come from flags,
//! environment variables or a serialized settings file alike.

use serde::{Deserialize, Serialize};

use crate::paths::{BoundaryKind, DEFAULT_CHROOT_MARKER, DEFAULT_SOURCE_MARKERS, MarkerSet};

/// Resolver settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResolverSettings {
    /// Markers whose presence identifies a chroot root.
    pub chroot_markers: Vec<String>,

    /// Markers whose presence identifies a source checkout root.
    pub source_markers: Vec<String>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            chroot_markers: vec![DEFAULT_CHROOT_MARKER.to_string()],
            source_markers: DEFAULT_SOURCE_MARKERS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ResolverSettings {
    /// Build settings, falling back to the defaults for any empty list.
    pub fn with_overrides(chroot_markers: Vec<String>, source_markers: Vec<String>) -> Self {
        let defaults = Self::default();
        Self {
            chroot_markers: if chroot_markers.is_empty() {
                defaults.chroot_markers
            } else {
                chroot_markers
            },
            source_markers: if source_markers.is_empty() {
                defaults.source_markers
            } else {
                source_markers
            },
        }
    }

    /// Parse both marker lists.
    pub fn marker_sets(&self) -> Result<(MarkerSet, MarkerSet), SettingsError> {
        let chroot = MarkerSet::parse(BoundaryKind::Chroot, &self.chroot_markers)?;
        let source = MarkerSet::parse(BoundaryKind::SourceRoot, &self.source_markers)?;
        Ok((chroot, source))
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("At least one {0} marker is required")]
    NoMarkers(BoundaryKind),

    #[error("Invalid marker '{marker}': {reason}")]
    InvalidMarker { marker: String, reason: String },
}

/// Validate resolver settings.
pub fn validate_settings(settings: &ResolverSettings) -> Result<(), SettingsError> {
    settings.marker_sets().map(|_| ())
}
