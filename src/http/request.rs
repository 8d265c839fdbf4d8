//! Inbound request model and outbound request construction.
//!
//! # Responsibilities
//! - Represent one gateway invocation independent of the runtime that delivered it
//! - Extract the remainder path from the `proxy` path parameter
//! - Build the outbound request: URL join, header copy, `Host` substitution
//!
//! # Design Decisions
//! - URL is a plain concatenation of base URL and remainder path, no normalization
//! - Headers are *set*, never appended: a repeated logical name (case-insensitive)
//!   keeps only its last value in inbound order
//! - Method is taken verbatim; only strings that are not valid HTTP tokens fail
//! - `Content-Length` and `Transfer-Encoding` are never copied; the transport
//!   frames the body from its actual length

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_LENGTH, HOST, TRANSFER_ENCODING};
use reqwest::{Client, Method};

use crate::config::DestinationConfig;
use crate::http::error::BuildError;

/// Name of the wildcard path parameter holding the remainder path.
pub const PROXY_PARAM: &str = "proxy";

/// Gateway request context fields, used only by the diagnostic trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingMetadata {
    pub protocol: Option<String>,
    pub domain_name: Option<String>,
    pub domain_prefix: Option<String>,
    pub resource_id: Option<String>,
    pub resource_path: Option<String>,
}

/// One inbound invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundRequest {
    /// HTTP method, verbatim.
    pub method: String,
    /// Original inbound path including stage and route (e.g., "/prod/route/users/42").
    pub path: String,
    /// Single-valued headers in arrival order.
    pub headers: Vec<(String, String)>,
    /// Raw text body, may be empty.
    pub body: String,
    pub path_parameters: BTreeMap<String, String>,
    /// Accepted from the gateway but not forwarded.
    pub query_parameters: BTreeMap<String, String>,
    pub routing: RoutingMetadata,
}

impl InboundRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Default::default()
        }
    }

    /// The wildcard-matched trailing path, or "" when the parameter is absent.
    pub fn remainder_path(&self) -> &str {
        self.path_parameters
            .get(PROXY_PARAM)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn with_remainder_path(self, remainder: impl Into<String>) -> Self {
        self.with_path_parameter(PROXY_PARAM, remainder)
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters.insert(name.into(), value.into());
        self
    }

    pub fn with_query_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_parameters.insert(name.into(), value.into());
        self
    }
}

/// Outbound URL: base URL followed by the remainder path, verbatim.
pub fn outbound_url(destination: &DestinationConfig, inbound: &InboundRequest) -> String {
    format!("{}{}", destination.base_url, inbound.remainder_path())
}

/// Copy inbound headers with set semantics, then force `Host` to the destination.
///
/// Body framing headers are dropped so they can never disagree with the body sent.
pub fn outbound_headers(
    destination: &DestinationConfig,
    inbound: &InboundRequest,
) -> Result<HeaderMap, BuildError> {
    let mut headers = HeaderMap::with_capacity(inbound.headers.len() + 1);

    for (name, value) in &inbound.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| BuildError::InvalidHeaderName(name.clone()))?;
        if header_name == CONTENT_LENGTH || header_name == TRANSFER_ENCODING {
            continue;
        }
        let header_value =
            HeaderValue::from_str(value).map_err(|_| BuildError::InvalidHeaderValue(name.clone()))?;
        headers.insert(header_name, header_value);
    }

    let host = HeaderValue::from_str(&destination.host())
        .map_err(|_| BuildError::InvalidHeaderValue(HOST.to_string()))?;
    headers.insert(HOST, host);

    Ok(headers)
}

/// Build the single outbound request for this invocation.
pub fn build_outbound(
    client: &Client,
    destination: &DestinationConfig,
    inbound: &InboundRequest,
) -> Result<reqwest::Request, BuildError> {
    let method = Method::from_bytes(inbound.method.as_bytes())
        .map_err(|_| BuildError::InvalidMethod(inbound.method.clone()))?;
    let headers = outbound_headers(destination, inbound)?;

    let mut builder = client
        .request(method, outbound_url(destination, inbound))
        .headers(headers);
    if !inbound.body.is_empty() {
        builder = builder.body(inbound.body.clone());
    }

    Ok(builder.build()?)
}
