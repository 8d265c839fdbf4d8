//! Per-invocation diagnostic trace.
//!
//! Enabled by `DestinationConfig::debug_logging`. Logs the destination, the
//! computed URL, the inbound routing details, a dump of the outbound request
//! and a summary of the reply. Rendering failures are downgraded to a warning.

use std::fmt::Write;

use thiserror::Error;

use crate::config::DestinationConfig;
use crate::http::{InboundRequest, ReplyEnvelope};

const REQUEST_BANNER_START: &str = "========  Start of outbound request  ========";
const REQUEST_BANNER_END: &str = "========  End of outbound request  ========";
const REPLY_BANNER_START: &str = "========  Start of forward response  ========";
const REPLY_BANNER_END: &str = "========  End of forward response  ========";

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("header {0:?} is not printable text")]
    NonTextHeader(String),

    #[error("request body is a stream")]
    StreamingBody,

    #[error(transparent)]
    Format(#[from] std::fmt::Error),
}

/// Log everything known about the invocation before dispatch.
pub fn log_invocation(
    destination: &DestinationConfig,
    inbound: &InboundRequest,
    outbound: &reqwest::Request,
) {
    let routing = &inbound.routing;
    let field = |value: &Option<String>| value.clone().unwrap_or_default();

    tracing::info!(destination = %destination.base_url, "New domain");
    tracing::info!(url = %outbound.url(), "New URL");
    tracing::info!(method = %inbound.method, "Method");
    tracing::info!(path = %inbound.path, "Inbound path");
    tracing::info!(
        protocol = %field(&routing.protocol),
        domain_name = %field(&routing.domain_name),
        domain_prefix = %field(&routing.domain_prefix),
        resource_id = %field(&routing.resource_id),
        resource_path = %field(&routing.resource_path),
        "Request context"
    );
    for (name, value) in &inbound.path_parameters {
        tracing::info!(name = %name, value = %value, "Path parameter");
    }

    match dump_request(outbound) {
        Ok(dump) => {
            tracing::info!("{}", REQUEST_BANNER_START);
            tracing::info!("{}", dump);
            tracing::info!("{}", REQUEST_BANNER_END);
        }
        Err(e) => tracing::warn!(error = %e, "Could not dump outbound request"),
    }
}

/// Log the reply about to be returned to the gateway.
pub fn log_reply(reply: &ReplyEnvelope) {
    tracing::info!("{}", REPLY_BANNER_START);
    tracing::info!(
        status = reply.status_code,
        headers = ?reply.headers,
        body = %reply.body,
        "Forward response"
    );
    tracing::info!("{}", REPLY_BANNER_END);
}

/// Render the outbound request in HTTP/1.1 wire form: request line, headers, blank line, body.
pub fn dump_request(request: &reqwest::Request) -> Result<String, DumpError> {
    let url = request.url();
    let mut target = url.path().to_string();
    if let Some(query) = url.query() {
        target.push('?');
        target.push_str(query);
    }

    let mut out = String::new();
    write!(out, "{} {} {:?}\r\n", request.method(), target, request.version())?;
    for (name, value) in request.headers() {
        let value = value
            .to_str()
            .map_err(|_| DumpError::NonTextHeader(name.to_string()))?;
        write!(out, "{}: {}\r\n", name, value)?;
    }
    out.push_str("\r\n");

    if let Some(body) = request.body() {
        let bytes = body.as_bytes().ok_or(DumpError::StreamingBody)?;
        out.push_str(&String::from_utf8_lossy(bytes));
    }

    Ok(out)
}
