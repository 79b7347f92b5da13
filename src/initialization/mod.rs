//! Application initialization and resource setup.
//!
//! Initializes the shared resources every worker uses: the logger, the
//! HTTP client, the DNS resolver, and the concurrency semaphore.

mod client;
mod logger;
mod resolver;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes the semaphore bounding worker concurrency.
///
/// Each in-flight classification holds one permit, so `count` is the
/// worker-pool size.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
