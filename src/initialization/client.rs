//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, DEFAULT_USER_AGENT};
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client for liveness probes.
///
/// Configured with a browser-like User-Agent, the per-request timeout from
/// the config, and redirect following (reqwest's default policy, up to 10
/// hops) so parked domains that bounce through a parking service still
/// land on analyzable content.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(InitializationError::from)?;
    Ok(Arc::new(client))
}
