//! Site liveness probing.
//!
//! Tries HTTPS, then HTTP, then a raw TCP connect, stopping at the first
//! success. Any HTTP response counts as live (even 4xx/5xx - the server
//! responded); a completed socket connection counts as live. Per-scheme
//! failures are swallowed: only if every scheme fails is the domain
//! reported not live, and that is a result, not an error.

use std::time::Duration;

use tokio::net::TcpStream;

use crate::config::MAX_BODY_BYTES;

/// Which probe scheme succeeded for a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// HTTPS GET received a response.
    Https,
    /// HTTP GET received a response.
    Http,
    /// Raw TCP connect completed (HTTP itself failed).
    Socket,
    /// Nothing answered.
    None,
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scheme::Https => write!(f, "https"),
            Scheme::Http => write!(f, "http"),
            Scheme::Socket => write!(f, "socket"),
            Scheme::None => write!(f, "none"),
        }
    }
}

/// Outcome of the liveness probe ladder for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityResult {
    /// First scheme that succeeded.
    pub scheme: Scheme,
    /// Final HTTP status code, when an HTTP(S) attempt succeeded.
    pub status: Option<u16>,
    /// Fetched body text (possibly empty), capped at [`MAX_BODY_BYTES`].
    pub body: String,
    /// True iff any scheme succeeded.
    pub is_live: bool,
}

impl Default for ConnectivityResult {
    fn default() -> Self {
        Self {
            scheme: Scheme::None,
            status: None,
            body: String::new(),
            is_live: false,
        }
    }
}

impl ConnectivityResult {
    /// Whether body text was captured for content analysis.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// Probes a domain for liveness: HTTPS, then HTTP, then raw TCP to ports
/// 80 and 443.
///
/// The HTTP client is expected to follow redirects and carry its own
/// request timeout; `socket_timeout` bounds each raw connect attempt.
pub async fn probe(
    domain: &str,
    client: &reqwest::Client,
    socket_timeout: Duration,
) -> ConnectivityResult {
    for (scheme, url) in [
        (Scheme::Https, format!("https://{domain}/")),
        (Scheme::Http, format!("http://{domain}/")),
    ] {
        match client.get(&url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = read_capped_body(response).await;
                log::debug!("{domain} answered {scheme} with status {status}");
                return ConnectivityResult {
                    scheme,
                    status: Some(status),
                    body,
                    is_live: true,
                };
            }
            Err(e) => {
                log::debug!("{scheme} probe failed for {domain}: {e}");
            }
        }
    }

    // HTTP failed entirely; a bare socket connect still proves something
    // is listening.
    for port in [80u16, 443] {
        match tokio::time::timeout(socket_timeout, TcpStream::connect((domain, port))).await {
            Ok(Ok(_stream)) => {
                log::debug!("{domain} accepted a TCP connection on port {port}");
                return ConnectivityResult {
                    scheme: Scheme::Socket,
                    status: None,
                    body: String::new(),
                    is_live: true,
                };
            }
            Ok(Err(e)) => {
                log::debug!("TCP connect to {domain}:{port} failed: {e}");
            }
            Err(_) => {
                log::debug!("TCP connect to {domain}:{port} timed out");
            }
        }
    }

    ConnectivityResult::default()
}

/// Reads a response body incrementally, stopping at [`MAX_BODY_BYTES`].
///
/// Streaming chunk by chunk keeps the cap a memory bound, not just a
/// scan bound: a server shipping a huge payload never gets more than one
/// chunk past the cap buffered. A mid-body read failure still counts as
/// live (the server responded); whatever arrived is kept for the scan.
async fn read_capped_body(mut response: reqwest::Response) -> String {
    let mut buf: Vec<u8> = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                if append_capped(&mut buf, &chunk) {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                log::debug!("Failed to read response body: {e}");
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Appends a chunk to the capped buffer, truncating at the cap.
///
/// Returns true once the buffer is full and reading should stop.
fn append_capped(buf: &mut Vec<u8>, chunk: &[u8]) -> bool {
    let remaining = MAX_BODY_BYTES.saturating_sub(buf.len());
    if chunk.len() >= remaining {
        buf.extend_from_slice(&chunk[..remaining]);
        return true;
    }
    buf.extend_from_slice(chunk);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_display() {
        assert_eq!(Scheme::Https.to_string(), "https");
        assert_eq!(Scheme::Http.to_string(), "http");
        assert_eq!(Scheme::Socket.to_string(), "socket");
        assert_eq!(Scheme::None.to_string(), "none");
    }

    #[test]
    fn test_append_capped_stops_at_the_cap() {
        let mut buf = Vec::new();
        assert!(!append_capped(&mut buf, &[0u8; 1024]));
        assert_eq!(buf.len(), 1024);

        // An oversized chunk is truncated to exactly the cap.
        let full = append_capped(&mut buf, &vec![0u8; MAX_BODY_BYTES * 2]);
        assert!(full);
        assert_eq!(buf.len(), MAX_BODY_BYTES);

        // Once full, further chunks add nothing.
        assert!(append_capped(&mut buf, &[0u8; 16]));
        assert_eq!(buf.len(), MAX_BODY_BYTES);
    }

    #[test]
    fn test_append_capped_exact_boundary() {
        let mut buf = Vec::new();
        assert!(append_capped(&mut buf, &vec![0u8; MAX_BODY_BYTES]));
        assert_eq!(buf.len(), MAX_BODY_BYTES);
    }

    #[test]
    fn test_default_result_is_not_live() {
        let result = ConnectivityResult::default();
        assert!(!result.is_live);
        assert_eq!(result.scheme, Scheme::None);
        assert!(result.status.is_none());
        assert!(!result.has_body());
    }
}
