//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised while resolving a page.
///
/// Only the orchestrator decides which of these abort a lookup. PTR and
/// public IP failures are downgraded to missing fields before they get there.
#[derive(Error, Debug)]
pub enum LookupError {
    /// An upstream answered with a non-success HTTP status.
    #[error("{service} failed: {status}")]
    Transport {
        /// Upstream that failed (`DoH`, a provider name)
        service: &'static str,
        /// HTTP status code returned
        status: u16,
    },

    /// The request never produced a response (connect, timeout, body read).
    #[error("HTTP request error: {0}")]
    Http(#[from] ReqwestError),

    /// The response body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Parse(String),

    /// The page URL has no usable hostname.
    #[error("No domain")]
    InvalidUrl(String),
}

impl LookupError {
    /// Returns `true` for errors caused by the upstream status code.
    pub fn is_transport(&self) -> bool {
        matches!(self, LookupError::Transport { .. })
    }
}
