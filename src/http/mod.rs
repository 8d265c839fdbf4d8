//! Request forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! InboundRequest (from the gateway adapter or the CLI)
//!     → request.rs (URL join, header copy, Host substitution)
//!     → forwarder.rs (single dispatch, full body read)
//!     → response.rs (status copy, header flattening)
//!     → ReplyEnvelope
//! ```

pub mod error;
pub mod forwarder;
pub mod request;
pub mod response;

pub use error::{BuildError, ForwardError, ForwardResult};
pub use forwarder::{forward, Forwarder};
pub use request::{InboundRequest, RoutingMetadata, PROXY_PARAM};
pub use response::ReplyEnvelope;
