//! Failures while loading exchange-rate data.
//!
//! Every variant takes the same path at the call site: logged and swallowed,
//! leaving the table as it was.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RateError {
    /// The endpoint URL could not be parsed
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout or body transfer failure
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status
    #[error("Endpoint '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not a JSON array of records
    #[error("Malformed exchange-rate data from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RateError {
    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            RateError::InvalidUrl { .. } => "invalid_url",
            RateError::Client(_) => "client",
            RateError::Request { source, .. } if source.is_timeout() => "timeout",
            RateError::Request { .. } => "request",
            RateError::Status { .. } => "status",
            RateError::Decode { .. } => "decode",
        }
    }
}
