//! Classification engine tests against deterministic stub network layers.
//!
//! No test here touches the network: DNS and liveness are injected through
//! the engine's trait seams, with counters asserting which stages ran.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use domain_verdict::classify::{DnsLookup, DomainClassifier, LivenessProbe, Status};
use domain_verdict::connectivity::{ConnectivityResult, Scheme};
use domain_verdict::dns::DnsRecordSet;
use domain_verdict::parking::{ParkingDetector, ParkingPatterns};
use domain_verdict::DnsError;

struct StubDns {
    result: Result<DnsRecordSet, DnsError>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl DnsLookup for StubDns {
    async fn resolve(&self, _domain: &str) -> Result<DnsRecordSet, DnsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

struct StubProbe {
    result: ConnectivityResult,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl LivenessProbe for StubProbe {
    async fn probe(&self, _domain: &str) -> ConnectivityResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

struct Harness {
    classifier: DomainClassifier,
    dns_calls: Arc<AtomicUsize>,
    probe_calls: Arc<AtomicUsize>,
}

fn harness(dns: Result<DnsRecordSet, DnsError>, conn: ConnectivityResult) -> Harness {
    let dns_calls = Arc::new(AtomicUsize::new(0));
    let probe_calls = Arc::new(AtomicUsize::new(0));
    let classifier = DomainClassifier::new(
        Arc::new(StubDns {
            result: dns,
            calls: Arc::clone(&dns_calls),
        }),
        Arc::new(StubProbe {
            result: conn,
            calls: Arc::clone(&probe_calls),
        }),
        Arc::new(ParkingDetector::new(ParkingPatterns::default())),
    );
    Harness {
        classifier,
        dns_calls,
        probe_calls,
    }
}

fn live_http(status: u16, body: &str) -> ConnectivityResult {
    ConnectivityResult {
        scheme: Scheme::Https,
        status: Some(status),
        body: body.to_string(),
        is_live: true,
    }
}

fn dns_with(mx_hosts: &[&str], has_a: bool) -> DnsRecordSet {
    DnsRecordSet {
        mx_hosts: mx_hosts.iter().map(|s| s.to_string()).collect(),
        has_a,
        ..Default::default()
    }
}

#[tokio::test]
async fn invalid_format_short_circuits_without_network() {
    let h = harness(Ok(dns_with(&["mx.example.com."], true)), live_http(200, "ok"));
    let result = h.classifier.classify("not a domain").await;

    assert_eq!(result.status, Status::Invalid);
    assert!(result.notes.contains("invalid_format"));
    assert_eq!(h.dns_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.probe_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_records_skip_the_prober() {
    let h = harness(Ok(DnsRecordSet::default()), live_http(200, "ok"));
    let result = h.classifier.classify("ghost.example.com").await;

    assert_eq!(result.status, Status::Invalid);
    assert!(result.notes.contains("no_dns_records"));
    assert_eq!(h.dns_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.probe_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn dns_timeout_is_reported_in_notes() {
    let timed_out = DnsRecordSet {
        timed_out: true,
        ..Default::default()
    };
    let h = harness(Ok(timed_out), ConnectivityResult::default());
    let result = h.classifier.classify("slow.example.com").await;

    assert_eq!(result.status, Status::Invalid);
    assert!(result.notes.contains("no_dns_records"));
    assert!(result.notes.contains("dns_timeout"));
}

#[tokio::test]
async fn resolver_failure_cause_is_carried_into_notes() {
    // A SERVFAIL emptied the record set; the verdict must not look like a
    // clean NXDOMAIN.
    let failed = DnsRecordSet {
        failure: Some("SERVFAIL resolving example.com".to_string()),
        ..Default::default()
    };
    let h = harness(Ok(failed), ConnectivityResult::default());
    let result = h.classifier.classify("broken-ns.example.com").await;

    assert_eq!(result.status, Status::Invalid);
    assert!(result.notes.contains("no_dns_records"));
    assert!(result.notes.contains("SERVFAIL resolving example.com"));
    assert_eq!(h.probe_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn parked_dominates_liveness() {
    // Parking MX plus a perfectly live site: parked still wins.
    let h = harness(
        Ok(dns_with(&["mx.sedoparking.com."], true)),
        live_http(200, "<html><body>welcome to our shop</body></html>"),
    );
    let result = h.classifier.classify("caught.example.com").await;

    assert_eq!(result.status, Status::Invalid);
    assert!(result.notes.contains("parked_domain"));
    assert!(result.notes.contains("known-parking-MX-pattern"));
}

#[tokio::test]
async fn mx_without_live_site_is_risky() {
    let h = harness(
        Ok(dns_with(&["mx1.mail.example.com."], false)),
        ConnectivityResult::default(),
    );
    let result = h.classifier.classify("mail-only.example.com").await;

    assert_eq!(result.status, Status::Risky);
    assert_eq!(result.notes, "mx_present_site_not_live");
}

#[tokio::test]
async fn live_site_with_records_is_valid() {
    let h = harness(
        Ok(dns_with(&["mx1.example.com."], true)),
        live_http(200, "<html><body>a real business site</body></html>"),
    );
    let result = h.classifier.classify("good-example.com").await;

    assert_eq!(result.status, Status::Valid);
    assert!(result.notes.contains("live via https (200)"));
    assert!(result.notes.contains("mx present"));
    assert!(result.notes.contains("a present"));
}

#[tokio::test]
async fn root_fallback_is_mentioned_in_valid_notes() {
    let fallback = DnsRecordSet {
        mx_hosts: vec!["mx1.example.com.".to_string()],
        has_a: true,
        used_root_fallback: true,
        ..Default::default()
    };
    let h = harness(Ok(fallback), live_http(200, "site content"));
    let result = h.classifier.classify("a.b.example.com").await;

    assert_eq!(result.status, Status::Valid);
    assert!(result.dns.used_root_fallback);
    assert!(result.notes.contains("root domain fallback"));
}

#[tokio::test]
async fn a_record_only_and_unreachable_is_dead() {
    let h = harness(Ok(dns_with(&[], true)), ConnectivityResult::default());
    let result = h.classifier.classify("dead.example.com").await;

    assert_eq!(result.status, Status::Invalid);
    assert_eq!(result.notes, "dead_domain");
}

#[tokio::test]
async fn for_sale_page_is_parked() {
    let h = harness(
        Ok(dns_with(&[], true)),
        live_http(
            200,
            "<html><body>This domain may be for sale. Contact us.</body></html>",
        ),
    );
    let result = h.classifier.classify("forsale.example.com").await;

    assert_eq!(result.status, Status::Invalid);
    assert!(result.notes.contains("parked_domain"));
    assert!(result.notes.contains("parking-keyword-in-content"));
}

#[tokio::test]
async fn socket_only_liveness_with_a_record_is_valid() {
    let socket_live = ConnectivityResult {
        scheme: Scheme::Socket,
        status: None,
        body: String::new(),
        is_live: true,
    };
    let h = harness(Ok(dns_with(&[], true)), socket_live);
    let result = h.classifier.classify("tcp-only.example.com").await;

    assert_eq!(result.status, Status::Valid);
    assert!(result.notes.contains("live via socket"));
}

#[tokio::test]
async fn dns_hard_error_becomes_error_note() {
    let h = harness(
        Err(DnsError::Resolver("network unreachable".to_string())),
        ConnectivityResult::default(),
    );
    let result = h.classifier.classify("unlucky.example.com").await;

    assert_eq!(result.status, Status::Invalid);
    assert!(result.notes.starts_with("error:"));
    assert!(result.notes.contains("network unreachable"));
    assert_eq!(h.probe_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn classify_is_idempotent_against_deterministic_stubs() {
    let h = harness(
        Ok(dns_with(&["mx1.example.com."], true)),
        live_http(404, "<html>not found</html>"),
    );
    let first = h.classifier.classify("repeat.example.com").await;
    let second = h.classifier.classify("repeat.example.com").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn spf_and_dmarc_never_influence_status() {
    let bare = dns_with(&["mx1.example.com."], true);
    let mut with_policy = bare.clone();
    with_policy.spf = Some("v=spf1 -all".to_string());
    with_policy.dmarc = Some("v=DMARC1; p=reject".to_string());

    let conn = live_http(200, "ordinary content");
    let without = harness(Ok(bare), conn.clone())
        .classifier
        .classify("policy.example.com")
        .await;
    let with = harness(Ok(with_policy), conn)
        .classifier
        .classify("policy.example.com")
        .await;

    assert_eq!(without.status, with.status);
    assert_eq!(without.notes, with.notes);
}

#[tokio::test]
async fn any_http_status_counts_as_live() {
    // 5xx still proves a server answered.
    let h = harness(Ok(dns_with(&[], true)), live_http(503, "maintenance"));
    let result = h.classifier.classify("flaky.example.com").await;

    assert_eq!(result.status, Status::Valid);
    assert!(result.notes.contains("live via https (503)"));
}
