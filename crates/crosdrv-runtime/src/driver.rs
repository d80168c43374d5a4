//! Driver factory.
//!
//! Wires the runtime adapters into the core `Driver` container. This is the
//! only place concrete port implementations are chosen.

use std::sync::Arc;

use crosdrv_core::ports::{CrosPort, Driver, MetricsPort};
use crosdrv_core::{PathResolver, ResolverSettings, SettingsError};

use crate::fs_probe::TokioFsProbe;
use crate::os::SystemOs;

/// Build a resolver over the real filesystem.
pub fn build_resolver(settings: &ResolverSettings) -> Result<PathResolver, SettingsError> {
    PathResolver::with_settings(Arc::new(TokioFsProbe::new()), settings)
}

/// Build a driver around an existing resolver and metrics sink.
pub fn build_driver(resolver: Arc<PathResolver>, metrics: Arc<dyn MetricsPort>) -> Driver {
    let cros: Arc<dyn CrosPort> = resolver;
    Driver::new(cros, metrics, Arc::new(SystemOs::new()))
}
