//! Configuration constants.
//!
//! Central location for timeouts, limits, and other tunables used across
//! the application.

/// Default number of concurrent classification workers.
pub const DEFAULT_WORKERS: usize = 10;

/// Timeout for each DNS query, in seconds.
///
/// DNS queries that exceed this are treated as "no records" for
/// classification, but flagged so notes can report the timeout.
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// Timeout for each HTTP(S) liveness attempt, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 8;

/// Timeout for each raw TCP connect attempt, in seconds.
pub const SOCKET_TIMEOUT_SECS: u64 = 5;

/// Maximum number of fetched body bytes retained for content analysis.
///
/// Bounds both memory per domain and the cost of the parking detector's
/// content scan.
pub const MAX_BODY_BYTES: usize = 32 * 1024;

/// User-Agent sent with liveness probes.
///
/// A browser-like agent avoids trivial bot blocks that would make live
/// sites look dead.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 domain_verdict/0.1";

/// Interval between periodic progress log lines, in seconds.
pub const PROGRESS_LOG_INTERVAL_SECS: u64 = 10;

/// Maximum accepted length of a whole domain name.
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Maximum accepted length of a single domain label.
pub const MAX_LABEL_LENGTH: usize = 63;
