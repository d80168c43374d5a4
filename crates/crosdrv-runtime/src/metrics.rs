//! Channel-backed metrics sink.
//!
//! `send` only pushes onto an unbounded in-process channel, so it never
//! blocks and never fails visibly. Whatever owns the receiving end decides
//! what to do with events; [`spawn_log_drain`] just logs them.

use std::sync::OnceLock;

use async_trait::async_trait;
use crosdrv_core::MetricsEvent;
use crosdrv_core::ports::{HostContext, MetricsPort};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Metrics sink that forwards events to a channel once activated.
///
/// Events sent before `activate` are dropped.
#[derive(Debug)]
pub struct ChannelMetricsSink {
    tx: mpsc::UnboundedSender<MetricsEvent>,
    host: OnceLock<HostContext>,
}

impl ChannelMetricsSink {
    /// Create a sink and the receiver its events are forwarded to.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<MetricsEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                host: OnceLock::new(),
            },
            rx,
        )
    }

    pub fn is_active(&self) -> bool {
        self.host.get().is_some()
    }

    /// Host context handed over on activation.
    pub fn host(&self) -> Option<&HostContext> {
        self.host.get()
    }
}

#[async_trait]
impl MetricsPort for ChannelMetricsSink {
    async fn activate(&self, host: HostContext) {
        if self.host.set(host).is_err() {
            debug!("metrics sink already active");
            return;
        }
        info!("metrics sink activated");
    }

    fn send(&self, event: MetricsEvent) {
        if !self.is_active() {
            debug!(description = %event.description, "metrics sink inactive; dropping event");
            return;
        }
        if self.tx.send(event).is_err() {
            debug!("metrics receiver closed; dropping event");
        }
    }
}

/// Log every event from `rx` until all senders are gone.
///
/// Resolves to the number of events drained.
pub fn spawn_log_drain(mut rx: mpsc::UnboundedReceiver<MetricsEvent>) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut drained = 0;
        while let Some(event) = rx.recv().await {
            info!(
                target: "crosdrv::metrics",
                category = ?event.category,
                group = ?event.group,
                name = ?event.name,
                description = %event.description,
                label = ?event.label,
                value = ?event.value,
                "metrics event"
            );
            drained += 1;
        }
        drained
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosdrv_core::{Category, FeatureGroup};

    fn event(description: &str) -> MetricsEvent {
        MetricsEvent::new(Category::Background, FeatureGroup::Misc, description)
    }

    #[tokio::test]
    async fn events_before_activation_are_dropped() {
        let (sink, mut rx) = ChannelMetricsSink::new();

        sink.send(event("too early"));
        assert!(rx.try_recv().is_err());

        sink.activate(HostContext::detached()).await;
        sink.send(event("on time"));
        assert_eq!(rx.try_recv().unwrap().description, "on time");
    }

    #[tokio::test]
    async fn second_activation_keeps_first_host() {
        let (sink, _rx) = ChannelMetricsSink::new();

        sink.activate(HostContext::new("first")).await;
        sink.activate(HostContext::new("second")).await;

        assert!(sink.is_active());
        assert_eq!(
            sink.host().and_then(|h| h.downcast_ref::<&str>()).copied(),
            Some("first")
        );
    }

    #[tokio::test]
    async fn send_after_receiver_closed_does_not_panic() {
        let (sink, rx) = ChannelMetricsSink::new();
        drop(rx);

        sink.activate(HostContext::detached()).await;
        sink.send(event("nobody listening"));
    }

    #[tokio::test]
    async fn drain_counts_events_until_sink_dropped() {
        let (sink, rx) = ChannelMetricsSink::new();
        let drain = spawn_log_drain(rx);

        sink.activate(HostContext::detached()).await;
        sink.send(event("one"));
        sink.send(event("two"));
        drop(sink);

        assert_eq!(drain.await.unwrap(), 2);
    }
}
