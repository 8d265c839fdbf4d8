//! API Gateway request forwarder.
//!
//! Runs as an AWS Lambda function behind an API Gateway `{proxy+}` resource
//! and forwards every invocation to one fixed destination.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────┐
//!                      │                    FORWARDER                     │
//!   API Gateway event  │  ┌─────────┐    ┌─────────┐    ┌─────────────┐   │
//!   ───────────────────┼─▶│ gateway │───▶│ request │───▶│  forwarder  │───┼──▶ Destination
//!                      │  │ adapter │    │  build  │    │  dispatch   │   │
//!                      │  └─────────┘    └─────────┘    └──────┬──────┘   │
//!                      │                                       │          │
//!   Reply envelope     │  ┌─────────┐    ┌─────────┐           │          │
//!   ◀──────────────────┼──│ gateway │◀───│response │◀──────────┘          │
//!                      │  │ adapter │    │ flatten │                      │
//!                      │  └─────────┘    └─────────┘                      │
//!                      │                                                  │
//!                      │   config (env / TOML)      observability (trace) │
//!                      └──────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//! - `DEST_DOMAIN`: destination base URL, e.g. `https://api.example.com/` (required)
//! - `LOG_MODE`: `true` enables the per-invocation diagnostic trace
//! - `LOG_LEVEL` / `RUST_LOG`: log filtering
//! - `FORWARDER_CONFIG`: path to a TOML file replacing the variables above

use std::sync::Arc;

use lambda_http::{service_fn, Request};

use gateway_forwarder::config::{self, validation::validate_config};
use gateway_forwarder::gateway;
use gateway_forwarder::http::Forwarder;
use gateway_forwarder::observability::logging;

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let config = config::load()?;
    logging::init(&config.observability);

    tracing::info!("gateway-forwarder v0.1.0 starting");

    for warning in validate_config(&config) {
        tracing::warn!(warning = %warning, "Suspicious destination configuration");
    }

    tracing::info!(
        destination = %config.destination.base_url,
        debug_logging = config.destination.debug_logging,
        "Configuration loaded"
    );

    let forwarder = Forwarder::new(Arc::new(config.destination))?;
    let forwarder = &forwarder;

    lambda_http::run(service_fn(move |request: Request| async move {
        gateway::handle(forwarder, request).await
    }))
    .await
}
