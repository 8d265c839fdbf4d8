//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level
//! - No ANSI colors: output ends up in a log collector, not a terminal

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(config: &ObservabilityConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(&config.log_level).into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_target(false))
        .try_init();
}

fn default_directive(level: &str) -> String {
    format!("gateway_forwarder={level},forward_cli={level},warn", level = level)
}
