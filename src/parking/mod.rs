//! Parked-domain detection.
//!
//! Heuristic, best-effort detection of parking/placeholder pages from MX
//! records and fetched page content. Checks run in priority order and the
//! first match wins, determining the reason reported in notes:
//!
//! 1. MX hostname matches a known parking-service pattern
//! 2. page content references a known parking-service URL
//! 3. page content contains a parking keyword
//! 4. page matches placeholder structural heuristics
//!
//! Content checks (2-4) only run when the probe captured body text; with
//! no content the MX check still applies.

mod patterns;

pub use patterns::ParkingPatterns;

use crate::connectivity::ConnectivityResult;
use crate::dns::DnsRecordSet;

/// Why a domain was considered parked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParkingReason {
    /// An MX host matched a known parking-service pattern.
    MxPattern,
    /// Page content referenced a known parking-service URL.
    ServiceUrl,
    /// Page content contained a parking keyword.
    Keyword,
    /// Page matched registrar-placeholder structural heuristics.
    Placeholder,
    /// Not parked.
    None,
}

impl std::fmt::Display for ParkingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParkingReason::MxPattern => write!(f, "known-parking-MX-pattern"),
            ParkingReason::ServiceUrl => write!(f, "parking-service-URL-in-content"),
            ParkingReason::Keyword => write!(f, "parking-keyword-in-content"),
            ParkingReason::Placeholder => write!(f, "placeholder-page-pattern"),
            ParkingReason::None => write!(f, "none"),
        }
    }
}

/// Parking decision for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingVerdict {
    /// Whether the domain looks parked.
    pub parked: bool,
    /// The first matching check.
    pub reason: ParkingReason,
    /// The specific pattern or phrase that matched, for notes.
    pub detail: Option<String>,
}

impl ParkingVerdict {
    fn not_parked() -> Self {
        Self {
            parked: false,
            reason: ParkingReason::None,
            detail: None,
        }
    }

    fn parked(reason: ParkingReason, detail: String) -> Self {
        Self {
            parked: true,
            reason,
            detail: Some(detail),
        }
    }
}

/// Heuristic parked-domain detector.
///
/// Holds the immutable pattern tables; safe to share read-only across
/// workers.
#[derive(Debug, Clone)]
pub struct ParkingDetector {
    patterns: ParkingPatterns,
}

impl ParkingDetector {
    /// Creates a detector over the given pattern tables.
    pub fn new(patterns: ParkingPatterns) -> Self {
        Self { patterns }
    }

    /// Decides whether a domain looks parked from its DNS posture and
    /// probe result. First matching check wins.
    pub fn detect(&self, dns: &DnsRecordSet, conn: &ConnectivityResult) -> ParkingVerdict {
        for mx_host in &dns.mx_hosts {
            let mx_lower = mx_host.to_lowercase();
            if let Some(pattern) = self
                .patterns
                .mx_patterns
                .iter()
                .find(|p| mx_lower.contains(p.as_str()))
            {
                return ParkingVerdict::parked(
                    ParkingReason::MxPattern,
                    format!("{mx_host} matches {pattern}"),
                );
            }
        }

        // No captured content means checks 2-4 cannot run; that is not a
        // "not parked" signal on its own, there is just nothing to scan.
        if !conn.has_body() {
            return ParkingVerdict::not_parked();
        }

        let body_lower = conn.body.to_lowercase();
        if let Some(fragment) = self
            .patterns
            .service_urls
            .iter()
            .find(|u| body_lower.contains(u.as_str()))
        {
            return ParkingVerdict::parked(ParkingReason::ServiceUrl, fragment.clone());
        }

        // Strip markup so keywords interrupted by tags still match.
        let stripped = strip_tags(&body_lower);
        if let Some(keyword) = self
            .patterns
            .keywords
            .iter()
            .find(|k| stripped.contains(k.as_str()))
        {
            return ParkingVerdict::parked(ParkingReason::Keyword, keyword.clone());
        }

        // Placeholder pages are near-empty boilerplate: a short stripped
        // body plus a registrar phrase. Length is counted in characters so
        // multibyte text is not penalized.
        if stripped.chars().count() < self.patterns.placeholder_max_len {
            if let Some(phrase) = self
                .patterns
                .placeholder_phrases
                .iter()
                .find(|p| stripped.contains(p.as_str()))
            {
                return ParkingVerdict::parked(
                    ParkingReason::Placeholder,
                    format!("short page containing '{phrase}'"),
                );
            }
        }

        ParkingVerdict::not_parked()
    }
}

/// Removes HTML tags and collapses whitespace.
///
/// Deliberately not a real HTML parse: just enough to keep markup from
/// splitting keywords.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut last_was_space = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                // Tag boundaries act as whitespace between text runs.
                if !last_was_space && !out.is_empty() {
                    out.push(' ');
                    last_was_space = true;
                }
            }
            _ if in_tag => {}
            c if c.is_whitespace() => {
                if !last_was_space && !out.is_empty() {
                    out.push(' ');
                    last_was_space = true;
                }
            }
            c => {
                out.push(c);
                last_was_space = false;
            }
        }
    }
    out.trim_end().to_string()
}
