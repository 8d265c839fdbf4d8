//! Configuration validation.
//!
//! # Responsibilities
//! - Flag destination base URLs that will produce surprising outbound URLs
//!
//! # Design Decisions
//! - Returns all warnings, not just the first
//! - Never rejects: an empty base URL or one without a trailing slash is
//!   forwarded exactly as configured
//! - Validation is a pure function: ForwarderConfig → Vec<ValidationWarning>

use std::fmt;

use crate::config::schema::ForwarderConfig;

/// A non-fatal configuration finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Base URL is empty; outbound URLs consist of the remainder path alone.
    EmptyBaseUrl,
    /// Base URL is not an absolute URL.
    UnparseableBaseUrl(String),
    /// Base URL lacks a trailing slash, so the remainder path is glued to the host.
    MissingTrailingSlash(String),
    /// Base URL carries a path beyond "/".
    BaseUrlHasPath(String),
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::EmptyBaseUrl => write!(f, "destination base URL is empty"),
            ValidationWarning::UnparseableBaseUrl(url) => {
                write!(f, "destination base URL {:?} is not an absolute URL", url)
            }
            ValidationWarning::MissingTrailingSlash(url) => {
                write!(f, "destination base URL {:?} has no trailing slash", url)
            }
            ValidationWarning::BaseUrlHasPath(url) => {
                write!(f, "destination base URL {:?} contains a path", url)
            }
        }
    }
}

/// Check a loaded configuration.
pub fn validate_config(config: &ForwarderConfig) -> Vec<ValidationWarning> {
    let base = &config.destination.base_url;
    let mut warnings = Vec::new();

    if base.is_empty() {
        warnings.push(ValidationWarning::EmptyBaseUrl);
        return warnings;
    }

    match url::Url::parse(base) {
        Ok(url) => {
            if url.path() != "/" {
                warnings.push(ValidationWarning::BaseUrlHasPath(base.clone()));
            }
        }
        Err(_) => warnings.push(ValidationWarning::UnparseableBaseUrl(base.clone())),
    }

    if !base.ends_with('/') {
        warnings.push(ValidationWarning::MissingTrailingSlash(base.clone()));
    }

    warnings
}
