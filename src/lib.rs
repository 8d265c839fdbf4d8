//! API Gateway request forwarder library.

pub mod config;
pub mod gateway;
pub mod http;
pub mod observability;

pub use config::{DestinationConfig, ForwarderConfig};
pub use http::{forward, ForwardError, Forwarder, InboundRequest, ReplyEnvelope};
