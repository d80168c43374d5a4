//! Runtime adapters for crosdrv.
//!
//! Implements the `crosdrv-core` ports against the real operating system:
//! - [`TokioFsProbe`] for filesystem probes
//! - [`SystemOs`] for home directory and login name
//! - [`ChannelMetricsSink`] for fire-and-forget usage events

#![deny(unsafe_code)]

mod driver;
mod fs_probe;
pub mod metrics;
mod os;

#[cfg(test)]
mod test_utils;

pub use driver::{build_driver, build_resolver};
pub use fs_probe::TokioFsProbe;
pub use metrics::{ChannelMetricsSink, spawn_log_drain};
pub use os::SystemOs;
