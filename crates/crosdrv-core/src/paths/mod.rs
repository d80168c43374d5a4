//! Boundary discovery for ChromiumOS chroots and source checkouts.
//!
//! This module provides the canonical resolution used by every crosdrv
//! adapter:
//! - Chroot root lookup
//! - Source checkout root lookup
//! - User path normalization for CLI and host input
//!
//! # Design
//!
//! - Returns `Option<PathBuf>` for "not found" and `PathError` for faults
//! - Filesystem access only through `FsProbePort`
//! - Ancestors are lexical parents; nothing is canonicalized

mod error;
mod marker;
mod normalize;
mod resolver;
mod walk;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::PathError;

// Marker model
pub use marker::{
    BoundaryKind, DEFAULT_CHROOT_MARKER, DEFAULT_SOURCE_MARKERS, Marker, MarkerKind, MarkerSet,
};

// Normalization
pub use normalize::{lexical_absolute, normalize_user_path};

// Resolver
pub use resolver::{Boundaries, PathResolver};
