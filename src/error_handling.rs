//! Error type definitions.
//!
//! Per-subsystem error taxonomy. DNS failures are isolated per record type
//! and downgraded to "absent" for classification; connectivity failures are
//! downgraded to "not live" rather than surfaced as errors. Only setup
//! failures (logger, HTTP client, unreadable input) propagate to the caller.

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

/// Resolver-level DNS failures.
///
/// NXDOMAIN and "no records found" are NOT errors (they yield an empty
/// record set); this type covers genuine resolver or network failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    /// The query did not complete within the configured timeout.
    #[error("DNS query timed out")]
    Timeout,

    /// Any other resolver failure (network unreachable, SERVFAIL, malformed
    /// response).
    #[error("DNS resolver error: {0}")]
    Resolver(String),
}
