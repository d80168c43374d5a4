//! Port definitions (trait abstractions) for host-environment capabilities.
//!
//! Ports define the interfaces that the core expects from the environment it
//! runs in. They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - One trait per capability, each independently mockable
//! - No tokio filesystem or process types in any signature
//! - Concrete adapters live in `crosdrv-runtime`

pub mod cros;
pub mod fs_probe;
pub mod metrics;
pub mod os;

use std::sync::Arc;

pub use cros::CrosPort;
pub use fs_probe::{EntryKind, FsProbePort};
pub use metrics::{HostContext, MetricsPort, NoopMetrics};
pub use os::{OsError, OsPort};

/// Container for all capability trait objects.
///
/// This struct provides a consistent way to hand the environment to feature
/// code without coupling it to concrete implementations. It is built once at
/// the composition root and cloned freely.
///
/// # Example
///
/// ```ignore
/// // In crosdrv-runtime:
/// let driver = crosdrv_runtime::build_driver(settings, metrics)?;
///
/// // In feature code:
/// if let Some(root) = driver.cros.find_source_dir(&file).await? { ... }
/// ```
#[derive(Clone)]
pub struct Driver {
    /// Chroot and source checkout lookups.
    pub cros: Arc<dyn CrosPort>,
    /// Usage event sink.
    pub metrics: Arc<dyn MetricsPort>,
    /// Current user facts.
    pub os: Arc<dyn OsPort>,
}

impl Driver {
    /// Create a new Driver container.
    pub fn new(
        cros: Arc<dyn CrosPort>,
        metrics: Arc<dyn MetricsPort>,
        os: Arc<dyn OsPort>,
    ) -> Self {
        Self { cros, metrics, os }
    }
}
