//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Normalize CLI-specific input
//!   2. Call the resolver or driver
//!   3. Format output for the terminal
//!
//! Each command reports exactly one usage event through the driver.

pub mod resolve;
pub mod user;

use crosdrv_core::{Category, FeatureGroup, MetricsEvent};

use crate::bootstrap::CliContext;

fn record(ctx: &CliContext, command: &str, outcome: &str) {
    ctx.driver.metrics.send(
        MetricsEvent::new(
            Category::Background,
            FeatureGroup::Misc,
            format!("cli: {command}"),
        )
        .with_name(format!("cli_{}", command.replace('-', "_")))
        .with_label(outcome),
    );
}
