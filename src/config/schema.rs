//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files; the
//! environment loader fills the same structures.

use serde::{Deserialize, Serialize};

/// Root configuration for the forwarder process.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ForwarderConfig {
    /// Where every invocation is forwarded to.
    pub destination: DestinationConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// The single upstream all invocations are forwarded to.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DestinationConfig {
    /// Scheme and host with a trailing slash (e.g., "https://api.example.com/").
    /// The remainder path is appended verbatim, no slash normalization.
    pub base_url: String,

    /// Emit the per-invocation diagnostic trace.
    pub debug_logging: bool,
}

impl DestinationConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            debug_logging: false,
        }
    }

    pub fn with_debug_logging(mut self, enabled: bool) -> Self {
        self.debug_logging = enabled;
        self
    }

    /// Value written into the outbound `Host` header.
    ///
    /// `host[:port]` of the base URL, or the raw base URL when it does not
    /// parse (the request itself will then fail to build).
    pub fn host(&self) -> String {
        match url::Url::parse(&self.base_url) {
            Ok(url) => match (url.host_str(), url.port()) {
                (Some(host), Some(port)) => format!("{}:{}", host, port),
                (Some(host), None) => host.to_string(),
                (None, _) => self.base_url.clone(),
            },
            Err(_) => self.base_url.clone(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
