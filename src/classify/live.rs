//! Production network seams.
//!
//! Real implementations of [`DnsLookup`] and [`LivenessProbe`] backed by
//! the shared hickory resolver and reqwest client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use super::{DnsLookup, LivenessProbe};
use crate::connectivity::{self, ConnectivityResult};
use crate::dns::{self, DnsRecordSet};
use crate::error_handling::DnsError;

/// [`DnsLookup`] backed by a shared hickory resolver.
pub struct HickoryDns {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryDns {
    /// Wraps a shared resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl DnsLookup for HickoryDns {
    async fn resolve(&self, domain: &str) -> Result<DnsRecordSet, DnsError> {
        // Sub-query failures are already isolated inside dns::resolve; a
        // fully-failed resolution still yields an (empty) record set.
        Ok(dns::resolve(domain, &self.resolver).await)
    }
}

/// [`LivenessProbe`] backed by a shared reqwest client plus raw TCP.
pub struct HttpProber {
    client: Arc<reqwest::Client>,
    socket_timeout: Duration,
}

impl HttpProber {
    /// Wraps a shared HTTP client. The client carries the HTTP timeout;
    /// `socket_timeout` bounds raw connect attempts.
    pub fn new(client: Arc<reqwest::Client>, socket_timeout: Duration) -> Self {
        Self {
            client,
            socket_timeout,
        }
    }
}

#[async_trait]
impl LivenessProbe for HttpProber {
    async fn probe(&self, domain: &str) -> ConnectivityResult {
        connectivity::probe(domain, &self.client, self.socket_timeout).await
    }
}
