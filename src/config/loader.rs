//! Configuration loading from disk or the process environment.

use std::fs;
use std::path::Path;

use crate::config::schema::{DestinationConfig, ForwarderConfig, ObservabilityConfig};

/// Destination base URL (e.g., "https://api.example.com/").
pub const DEST_DOMAIN: &str = "DEST_DOMAIN";
/// "true" enables the diagnostic trace; any other value disables it.
pub const LOG_MODE: &str = "LOG_MODE";
/// Optional log level, overridden by `RUST_LOG`.
pub const LOG_LEVEL: &str = "LOG_LEVEL";
/// Path to a TOML config file; when set, the environment variables above are ignored.
pub const FORWARDER_CONFIG: &str = "FORWARDER_CONFIG";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    MissingVar(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::MissingVar(name) => {
                write!(f, "Missing required environment variable {}", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ForwarderConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Load configuration from the process environment.
pub fn load_from_env() -> Result<ForwarderConfig, ConfigError> {
    load_from_vars(|name| std::env::var(name).ok())
}

/// Load configuration from `FORWARDER_CONFIG` if set, otherwise from the environment.
pub fn load() -> Result<ForwarderConfig, ConfigError> {
    match std::env::var_os(FORWARDER_CONFIG) {
        Some(path) => load_config(Path::new(&path)),
        None => load_from_env(),
    }
}

/// Build a config from an arbitrary variable lookup.
///
/// An empty `DEST_DOMAIN` is accepted; only its absence is an error.
pub fn load_from_vars<F>(lookup: F) -> Result<ForwarderConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let base_url = lookup(DEST_DOMAIN).ok_or(ConfigError::MissingVar(DEST_DOMAIN))?;
    let debug_logging = lookup(LOG_MODE).as_deref() == Some("true");

    let mut observability = ObservabilityConfig::default();
    if let Some(level) = lookup(LOG_LEVEL) {
        observability.log_level = level;
    }

    Ok(ForwarderConfig {
        destination: DestinationConfig {
            base_url,
            debug_logging,
        },
        observability,
    })
}
