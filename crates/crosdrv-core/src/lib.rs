//! Core domain types and port definitions for crosdrv.
//!
//! crosdrv isolates host-environment dependent operations behind small
//! capability traits (see [`ports`]). The one piece with real logic is
//! [`paths::PathResolver`], which walks up from a path to find the enclosing
//! ChromiumOS chroot and source checkout.

#![deny(unused_crate_dependencies)]

pub mod events;
pub mod paths;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use events::{Category, FeatureGroup, MetricsEvent};
pub use paths::{
    Boundaries, BoundaryKind, Marker, MarkerKind, MarkerSet, PathError, PathResolver,
    normalize_user_path,
};
pub use ports::{
    CrosPort, Driver, EntryKind, FsProbePort, HostContext, MetricsPort, NoopMetrics, OsError,
    OsPort,
};
pub use settings::{ResolverSettings, SettingsError, validate_settings};

// Used only by mock-based and serialization tests
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use serde_json as _;
