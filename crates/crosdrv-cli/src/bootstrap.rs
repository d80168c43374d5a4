//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Path resolver over the real filesystem (via crosdrv-runtime)
//! - Metrics sink and its log drain (via crosdrv-runtime)
//! - Driver container (via crosdrv-core)
//!
//! Command handlers receive the fully-composed context and delegate to it.

use std::sync::Arc;

use crosdrv_core::ports::{Driver, HostContext, MetricsPort};
use crosdrv_core::{PathResolver, ResolverSettings, validate_settings};
use crosdrv_runtime::{ChannelMetricsSink, build_driver, build_resolver, spawn_log_drain};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Marker lists for both boundary kinds.
    pub settings: ResolverSettings,
}

impl CliConfig {
    /// Build config from command-line marker overrides.
    ///
    /// An empty list keeps the built-in markers for that kind.
    pub fn from_markers(chroot_markers: Vec<String>, source_markers: Vec<String>) -> Self {
        Self {
            settings: ResolverSettings::with_overrides(chroot_markers, source_markers),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Resolver for lookups that need more than the driver exposes.
    pub resolver: Arc<PathResolver>,
    /// Capability container handed to handlers.
    pub driver: Driver,
    /// Fires when the user interrupts the running command.
    pub cancel: CancellationToken,
    metrics_drain: JoinHandle<usize>,
}

impl CliContext {
    /// Access the resolver.
    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Access the driver.
    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    /// Cancel in-flight lookups on Ctrl-C.
    pub fn cancel_on_interrupt(&self) {
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("interrupt received; cancelling");
                cancel.cancel();
            }
        });
    }

    /// Release the driver and wait for queued metrics events to be logged.
    ///
    /// Returns the number of events drained.
    pub async fn shutdown(self) -> usize {
        let Self {
            resolver,
            driver,
            metrics_drain,
            ..
        } = self;
        drop(driver);
        drop(resolver);
        match metrics_drain.await {
            Ok(count) => {
                debug!(count, "metrics drained");
                count
            }
            Err(err) => {
                warn!(error = %err, "metrics drain task failed");
                0
            }
        }
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Validates the marker settings and builds the resolver
/// 2. Creates and activates the metrics sink
/// 3. Assembles the driver
pub async fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    validate_settings(&config.settings)?;
    debug!(settings = ?config.settings, "marker settings accepted");
    let resolver = Arc::new(build_resolver(&config.settings)?);

    let (sink, rx) = ChannelMetricsSink::new();
    let metrics_drain = spawn_log_drain(rx);
    // The CLI has no host extension to hand over.
    sink.activate(HostContext::detached()).await;
    let metrics: Arc<dyn MetricsPort> = Arc::new(sink);

    let driver = build_driver(Arc::clone(&resolver), metrics);

    Ok(CliContext {
        resolver,
        driver,
        cancel: CancellationToken::new(),
        metrics_drain,
    })
}
