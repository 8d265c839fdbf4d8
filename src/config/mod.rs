//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! FORWARDER_CONFIG (TOML file) or DEST_DOMAIN / LOG_MODE (environment)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (advisory checks, logged at startup)
//!     → ForwarderConfig (immutable)
//!     → DestinationConfig shared via Arc with the forwarder
//! ```
//!
//! # Design Decisions
//! - Config is loaded once per process; there is no reload path
//! - All fields have defaults to allow minimal configs
//! - Validation never rejects a config, it only reports warnings

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, load_config, load_from_env, ConfigError};
pub use schema::{DestinationConfig, ForwarderConfig, ObservabilityConfig};
