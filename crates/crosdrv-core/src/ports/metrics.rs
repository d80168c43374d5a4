//! Metrics sink port.
//!
//! This module defines the abstraction for reporting usage events.
//! Implementations own transport, batching and serialization; the core only
//! hands events over.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::events::MetricsEvent;

/// Opaque handle to the host environment that activated the driver.
///
/// The host creates it and owns its lifetime. The core only passes it
/// through to `MetricsPort::activate`; sinks that know the concrete host
/// type can recover it with [`HostContext::downcast_ref`].
#[derive(Clone)]
pub struct HostContext(Arc<dyn Any + Send + Sync>);

impl HostContext {
    pub fn new<T: Any + Send + Sync>(inner: T) -> Self {
        Self(Arc::new(inner))
    }

    /// Context for hosts that have nothing to share (CLI, tests).
    pub fn detached() -> Self {
        Self::new(())
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext").finish_non_exhaustive()
    }
}

/// Trait for reporting usage events.
///
/// # Implementations
///
/// - `NoopMetrics` - For tests and hosts without telemetry
/// - Adapter-specific sinks (channel-backed, remote collectors, ...)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricsPort: Send + Sync {
    /// One-time lifecycle hook invoked by the host before any event is sent.
    async fn activate(&self, host: HostContext);

    /// Report an event.
    ///
    /// Fire-and-forget: this must not block and must not surface transport
    /// failures to the caller.
    fn send(&self, event: MetricsEvent);
}

/// A no-op metrics sink.
///
/// Discards all events. Suitable for unit tests and for hosts where the user
/// has not opted into telemetry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl NoopMetrics {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetricsPort for NoopMetrics {
    async fn activate(&self, _host: HostContext) {}

    fn send(&self, _event: MetricsEvent) {
        // Intentionally do nothing
    }
}
