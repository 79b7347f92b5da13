//! The domain classification engine.
//!
//! Combines format validation, DNS posture, liveness probing, and parking
//! detection into a final verdict per domain. The engine talks to the
//! network through the [`DnsLookup`] and [`LivenessProbe`] trait seams so
//! it can be exercised against deterministic stubs in tests.
//!
//! The decision procedure is an ordered early-return chain; every failure
//! mode while classifying one domain resolves to a [`ValidationResult`]
//! for that domain, never an error that could abort the batch.

mod live;

pub use live::{HickoryDns, HttpProber};

use std::sync::Arc;

use async_trait::async_trait;

use crate::connectivity::ConnectivityResult;
use crate::dns::DnsRecordSet;
use crate::error_handling::DnsError;
use crate::format::validate_format;
use crate::parking::{ParkingDetector, ParkingReason, ParkingVerdict};

/// Final classification status for a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Usable for email or web purposes.
    Valid,
    /// Not usable (bad format, no records, parked, dead, or errored).
    Invalid,
    /// Ambiguous: can plausibly receive mail despite no live site.
    Risky,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Valid => write!(f, "Valid"),
            Status::Invalid => write!(f, "Invalid"),
            Status::Risky => write!(f, "Risky"),
        }
    }
}

/// The complete verdict for one domain.
///
/// Each field is set exactly once during the single classification pass;
/// the result is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// The domain as classified.
    pub domain: String,
    /// DNS posture (empty defaults when classification ended before DNS).
    pub dns: DnsRecordSet,
    /// Probe outcome (not-live defaults when the prober never ran).
    pub connectivity: ConnectivityResult,
    /// Parking decision.
    pub parking: ParkingVerdict,
    /// Final status.
    pub status: Status,
    /// Human-readable summary of the decisive factor(s).
    pub notes: String,
}

impl ValidationResult {
    fn terminal(domain: &str, status: Status, notes: impl Into<String>) -> Self {
        Self {
            domain: domain.to_string(),
            dns: DnsRecordSet::default(),
            connectivity: ConnectivityResult::default(),
            parking: ParkingVerdict {
                parked: false,
                reason: ParkingReason::None,
                detail: None,
            },
            status,
            notes: notes.into(),
        }
    }
}

/// DNS lookup seam for the engine.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Resolves the DNS posture for a domain.
    async fn resolve(&self, domain: &str) -> Result<DnsRecordSet, DnsError>;
}

/// Liveness probe seam for the engine.
#[async_trait]
pub trait LivenessProbe: Send + Sync {
    /// Probes a domain for reachability and page content.
    async fn probe(&self, domain: &str) -> ConnectivityResult;
}

/// Classifies single domains into Valid/Invalid/Risky verdicts.
///
/// Cheap to share: holds `Arc`s to the network seams and the read-only
/// pattern tables.
#[derive(Clone)]
pub struct DomainClassifier {
    dns: Arc<dyn DnsLookup>,
    prober: Arc<dyn LivenessProbe>,
    detector: Arc<ParkingDetector>,
}

impl DomainClassifier {
    /// Creates a classifier over the given network seams and detector.
    pub fn new(
        dns: Arc<dyn DnsLookup>,
        prober: Arc<dyn LivenessProbe>,
        detector: Arc<ParkingDetector>,
    ) -> Self {
        Self {
            dns,
            prober,
            detector,
        }
    }

    /// Runs the full classification pipeline for one domain.
    ///
    /// Terminal on first exit:
    /// 1. format check (no network on failure)
    /// 2. DNS posture; no MX and no A post-fallback ends here
    /// 3. liveness probe (exactly once), then parking detection
    /// 4. decision table
    ///
    /// Never fails: sub-component errors become
    /// `Invalid`/"error: <description>".
    pub async fn classify(&self, domain: &str) -> ValidationResult {
        if !validate_format(domain) {
            return ValidationResult::terminal(domain, Status::Invalid, "invalid_format");
        }

        let dns = match self.dns.resolve(domain).await {
            Ok(set) => set,
            Err(e) => {
                return ValidationResult::terminal(domain, Status::Invalid, format!("error: {e}"));
            }
        };

        if dns.is_empty() {
            let mut notes = String::from("no_dns_records");
            if dns.timed_out {
                notes.push_str(" (dns_timeout)");
            }
            if let Some(failure) = &dns.failure {
                notes.push_str("; ");
                notes.push_str(failure);
            }
            return ValidationResult {
                dns,
                ..ValidationResult::terminal(domain, Status::Invalid, notes)
            };
        }

        // DNS has something to validate; probe once and hand the content
        // to the parking detector.
        let connectivity = self.prober.probe(domain).await;
        let parking = self.detector.detect(&dns, &connectivity);

        let (status, notes) = decide(&dns, &connectivity, &parking);

        ValidationResult {
            domain: domain.to_string(),
            dns,
            connectivity,
            parking,
            status,
            notes,
        }
    }
}

/// The decision table, evaluated in order. Parked dominates everything;
/// SPF/DMARC are deliberately never consulted.
fn decide(
    dns: &DnsRecordSet,
    conn: &ConnectivityResult,
    parking: &ParkingVerdict,
) -> (Status, String) {
    if parking.parked {
        let mut notes = format!("parked_domain ({})", parking.reason);
        if let Some(detail) = &parking.detail {
            notes.push_str(&format!(": {detail}"));
        }
        return (Status::Invalid, notes);
    }

    if dns.has_mx() && !conn.is_live {
        return (Status::Risky, "mx_present_site_not_live".to_string());
    }

    if conn.is_live && (dns.has_mx() || dns.has_a) {
        let mut passed = Vec::new();
        match conn.status {
            Some(code) => passed.push(format!("live via {} ({code})", conn.scheme)),
            None => passed.push(format!("live via {}", conn.scheme)),
        }
        if dns.has_mx() {
            passed.push("mx present".to_string());
        }
        if dns.has_a {
            passed.push("a present".to_string());
        }
        if dns.used_root_fallback {
            passed.push("root domain fallback used".to_string());
        }
        return (Status::Valid, passed.join("; "));
    }

    if !conn.is_live && !dns.has_mx() && dns.has_a {
        return (Status::Invalid, "dead_domain".to_string());
    }

    // Unreachable given step 2 filtered empty record sets, but the table
    // must stay total.
    (
        Status::Invalid,
        "error: unclassifiable record/liveness combination".to_string(),
    )
}
