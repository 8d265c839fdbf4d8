//! API Gateway proxy-integration adapter.
//!
//! # Responsibilities
//! - Convert a `lambda_http` request into an `InboundRequest`
//! - Convert a `ReplyEnvelope` into a `lambda_http` response
//! - Surface forwarding failures to the runtime as invocation errors
//!
//! # Design Decisions
//! - Event decoding and response encoding stay in `lambda_http`
//! - Repeated inbound header names collapse to the last value, the same
//!   set semantics the forwarder applies
//! - Bodies are text: a binary (base64-decoded) body that is not valid UTF-8
//!   has its invalid sequences replaced with U+FFFD before forwarding

use lambda_http::http::header::{HeaderName, HeaderValue};
use lambda_http::http::StatusCode;
use lambda_http::request::RequestContext;
use lambda_http::{Body, Error, Request, RequestExt, Response};

use crate::http::{Forwarder, InboundRequest, ReplyEnvelope, RoutingMetadata};

/// Build the inbound request model from a gateway invocation.
pub fn inbound_from_lambda(request: &Request) -> InboundRequest {
    let mut inbound = InboundRequest::new(request.method().as_str())
        .with_path(request.uri().path());

    for (name, value) in request.headers() {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        match inbound
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name.as_str()))
        {
            Some(entry) => entry.1 = value,
            None => inbound.headers.push((name.as_str().to_string(), value)),
        }
    }

    let body: &[u8] = request.body();
    inbound.body = String::from_utf8_lossy(body).into_owned();

    for (name, value) in request.path_parameters().iter() {
        inbound.path_parameters.insert(name.to_string(), value.to_string());
    }
    for (name, value) in request.query_string_parameters().iter() {
        inbound.query_parameters.insert(name.to_string(), value.to_string());
    }

    inbound.routing = routing_metadata(request.request_context_ref());
    inbound
}

fn routing_metadata(context: Option<&RequestContext>) -> RoutingMetadata {
    match context {
        Some(RequestContext::ApiGatewayV1(ctx)) => RoutingMetadata {
            protocol: ctx.protocol.clone(),
            domain_name: ctx.domain_name.clone(),
            domain_prefix: ctx.domain_prefix.clone(),
            resource_id: ctx.resource_id.clone(),
            resource_path: ctx.resource_path.clone(),
        },
        _ => RoutingMetadata::default(),
    }
}

/// Encode the reply envelope as the runtime's HTTP response.
pub fn into_lambda_response(reply: ReplyEnvelope) -> Result<Response<Body>, Error> {
    let mut response = Response::new(Body::from(reply.body));
    *response.status_mut() = StatusCode::from_u16(reply.status_code)?;

    let headers = response.headers_mut();
    for (name, value) in &reply.headers {
        headers.insert(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }

    Ok(response)
}

/// Handle one invocation end to end.
pub async fn handle(forwarder: &Forwarder, request: Request) -> Result<Response<Body>, Error> {
    let inbound = inbound_from_lambda(&request);

    match forwarder.forward(&inbound).await {
        Ok(reply) => into_lambda_response(reply),
        Err(e) => {
            tracing::error!(
                stage = e.stage(),
                method = %inbound.method,
                remainder = %inbound.remainder_path(),
                error = %e,
                "Forwarding failed"
            );
            Err(e.into())
        }
    }
}
