//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (subscriber setup, structured log events)
//!     → trace.rs (per-invocation diagnostic trace, opt-in)
//!
//! Consumers:
//!     → stdout, collected by the function runtime
//! ```
//!
//! # Design Decisions
//! - Structured fields via the tracing crate
//! - The diagnostic trace is best-effort; its failures are only logged

pub mod logging;
pub mod trace;
