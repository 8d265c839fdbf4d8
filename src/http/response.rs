//! Reply envelope and response translation.
//!
//! # Responsibilities
//! - Model the `{statusCode, headers, body}` envelope the gateway expects
//! - Flatten multi-value response headers into one comma-joined string
//!
//! # Design Decisions
//! - Status is copied verbatim; an upstream error status is a normal reply
//! - Header names are emitted in canonical MIME form (`Content-Type`)
//! - `Transfer-Encoding` is dropped: the body is already fully read and de-chunked
//! - Body bytes are reinterpreted as UTF-8 without charset negotiation

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, TRANSFER_ENCODING};
use serde::{Deserialize, Serialize};

/// The value returned to the invoking gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyEnvelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// Join every value of each header name with `,`, in the order the transport exposes them.
pub fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .keys()
        .filter(|name| *name != TRANSFER_ENCODING)
        .map(|name| {
            let joined = headers
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()))
                .collect::<Vec<_>>()
                .join(",");
            (canonical_header_key(name.as_str()), joined)
        })
        .collect()
}

/// Canonical MIME form of a header name: first letter and every letter after
/// a hyphen upper-cased, the rest lower-cased. Names containing bytes outside
/// the token set are returned unchanged.
pub fn canonical_header_key(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_string();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let mapped = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            mapped
        })
        .collect()
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}
