//! Event types reported through the metrics port.
//!
//! # Structure
//!
//! - `metrics` - Usage events (category, feature group, description)
//!
//! Events derive `Serialize` so sinks can encode them however their transport
//! requires; the core never encodes them itself.

mod metrics;

pub use metrics::{Category, FeatureGroup, MetricsEvent};
