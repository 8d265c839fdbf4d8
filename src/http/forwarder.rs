//! The forwarding pipeline.
//!
//! # Responsibilities
//! - Build one outbound request per invocation
//! - Dispatch it once and read the full response body
//! - Translate the response into a reply envelope
//! - Emit the diagnostic trace when the destination enables it
//!
//! # Design Decisions
//! - No retries, no timeout, no body size cap
//! - Idle connections are not pooled; each call opens its own connection
//! - Trace failures are logged and never change the outcome

use std::sync::Arc;
use std::time::Instant;

use reqwest::Client;

use crate::config::DestinationConfig;
use crate::http::error::{BuildError, ForwardError, ForwardResult};
use crate::http::request::{build_outbound, InboundRequest};
use crate::http::response::{flatten_headers, ReplyEnvelope};
use crate::observability::trace;

/// Forwards inbound invocations to a single destination.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: Client,
    destination: Arc<DestinationConfig>,
}

impl Forwarder {
    /// Create a forwarder for the given destination.
    pub fn new(destination: Arc<DestinationConfig>) -> reqwest::Result<Self> {
        let client = Client::builder().pool_max_idle_per_host(0).build()?;
        Ok(Self {
            client,
            destination,
        })
    }

    pub fn destination(&self) -> &DestinationConfig {
        &self.destination
    }

    /// Forward one invocation and build its reply.
    pub async fn forward(&self, inbound: &InboundRequest) -> ForwardResult<ReplyEnvelope> {
        let start_time = Instant::now();
        let destination = self.destination.as_ref();

        let request = build_outbound(&self.client, destination, inbound)?;
        if destination.debug_logging {
            trace::log_invocation(destination, inbound, &request);
        }

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            "Forwarding request"
        );

        let response = self
            .client
            .execute(request)
            .await
            .map_err(ForwardError::Dispatch)?;

        let status_code = response.status().as_u16();
        let headers = flatten_headers(response.headers());
        let body = response.bytes().await.map_err(ForwardError::ReadBody)?;

        let reply = ReplyEnvelope {
            status_code,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        };

        tracing::debug!(
            status = reply.status_code,
            body_len = body.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Upstream responded"
        );

        if destination.debug_logging {
            trace::log_reply(&reply);
        }

        Ok(reply)
    }
}

/// One-shot forward with a freshly built client.
pub async fn forward(
    inbound: &InboundRequest,
    destination: &DestinationConfig,
) -> ForwardResult<ReplyEnvelope> {
    let forwarder = Forwarder::new(Arc::new(destination.clone()))
        .map_err(|e| ForwardError::RequestConstruction(BuildError::Client(e)))?;
    forwarder.forward(inbound).await
}
