//! DNS posture resolution.
//!
//! Builds a [`DnsRecordSet`] per domain using `hickory-resolver`:
//! - MX and A records for the exact domain
//! - a registrable-root fallback for subdomains with no direct records
//! - SPF and DMARC (informational, no fallback)
//!
//! Sub-query failures are isolated per record type: a timeout on MX never
//! prevents the A or TXT queries, and the record set is always fully
//! populated.

mod extract;
mod records;

pub use extract::{extract_dmarc_record, extract_spf_record};
pub use records::{lookup_a_record, lookup_mx_records, lookup_txt_records};

use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::DnsError;

/// Per-domain DNS posture. Built once per domain, never mutated after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsRecordSet {
    /// MX exchange hostnames, ordered by preference. May be empty.
    pub mx_hosts: Vec<String>,
    /// Whether the domain has at least one A record.
    pub has_a: bool,
    /// SPF record text, if a TXT record starting with `v=spf1` exists.
    pub spf: Option<String>,
    /// DMARC record text from `_dmarc.<domain>`, if present.
    pub dmarc: Option<String>,
    /// True when MX/A came from the registrable root rather than the
    /// domain itself.
    pub used_root_fallback: bool,
    /// True when an MX or A query timed out and was downgraded to "no
    /// records". Lets notes distinguish dns_timeout from genuine NXDOMAIN.
    pub timed_out: bool,
    /// Description of the first hard resolver failure (SERVFAIL, connection
    /// refused, ...) hit while querying MX/A, if any. Absent for clean
    /// NXDOMAIN answers and plain timeouts.
    pub failure: Option<String>,
}

impl DnsRecordSet {
    /// Whether the domain (post-fallback) has any MX records.
    pub fn has_mx(&self) -> bool {
        !self.mx_hosts.is_empty()
    }

    /// Whether the domain has neither MX nor A records.
    pub fn is_empty(&self) -> bool {
        self.mx_hosts.is_empty() && !self.has_a
    }
}

/// Computes the registrable root of a subdomain (last two labels).
///
/// Returns `None` for domains with fewer than three labels, which are
/// already roots for fallback purposes.
pub fn registrable_root(domain: &str) -> Option<String> {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 3 {
        return None;
    }
    Some(labels[labels.len() - 2..].join("."))
}

/// Resolves the full DNS posture for a domain.
///
/// Queries MX and A for the exact domain; if both are empty and the domain
/// is plausibly a subdomain, retries against the registrable root and sets
/// the fallback flag when the root yields records. SPF and DMARC are
/// queried independently with no fallback.
///
/// Never fails: every sub-query error is downgraded to "absent" for that
/// record type, with timeouts flagged on the result.
pub async fn resolve(domain: &str, resolver: &TokioAsyncResolver) -> DnsRecordSet {
    let mut set = DnsRecordSet::default();

    let direct = query_mx_a(domain, resolver).await;
    set.mx_hosts = direct.mx_hosts;
    set.has_a = direct.has_a;
    set.timed_out = direct.timed_out;
    set.failure = direct.failure;

    if set.is_empty() {
        if let Some(root) = registrable_root(domain) {
            log::debug!("No direct records for {domain}, trying root domain {root}");
            let root_records = query_mx_a(&root, resolver).await;
            set = fold_root_fallback(set, root_records);
        }
    }

    // SPF/DMARC are informational only; no root fallback applies.
    let txt = lookup_txt_records(domain, resolver).await.unwrap_or_default();
    set.spf = extract_spf_record(&txt);

    let dmarc_txt = lookup_txt_records(&format!("_dmarc.{domain}"), resolver)
        .await
        .unwrap_or_default();
    set.dmarc = extract_dmarc_record(&dmarc_txt);

    set
}

/// Outcome of an MX+A query against a single name, with failures downgraded
/// to empty results but described for the caller.
#[derive(Debug, Default)]
struct MxAQuery {
    mx_hosts: Vec<String>,
    has_a: bool,
    timed_out: bool,
    failure: Option<String>,
}

/// Replaces an empty record set with the registrable root's records when
/// the root has any, marking the fallback. A timeout or failure during the
/// root query is carried over either way.
fn fold_root_fallback(mut set: DnsRecordSet, root: MxAQuery) -> DnsRecordSet {
    if !root.mx_hosts.is_empty() || root.has_a {
        set.mx_hosts = root.mx_hosts;
        set.has_a = root.has_a;
        set.used_root_fallback = true;
    }
    set.timed_out |= root.timed_out;
    set.failure = set.failure.or(root.failure);
    set
}

/// Queries MX and A for one name, downgrading failures to empty results.
/// Timeouts set the timeout flag; other resolver failures are kept as a
/// description so the caller can report the cause. The first failure wins.
async fn query_mx_a(domain: &str, resolver: &TokioAsyncResolver) -> MxAQuery {
    let mut query = MxAQuery::default();

    match lookup_mx_records(domain, resolver).await {
        Ok(hosts) => query.mx_hosts = hosts,
        Err(e) => record_failure(&mut query, e),
    }

    match lookup_a_record(domain, resolver).await {
        Ok(found) => query.has_a = found,
        Err(e) => record_failure(&mut query, e),
    }

    query
}

fn record_failure(query: &mut MxAQuery, e: DnsError) {
    match e {
        DnsError::Timeout => query.timed_out = true,
        DnsError::Resolver(msg) => {
            if query.failure.is_none() {
                query.failure = Some(msg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrable_root_of_subdomain() {
        assert_eq!(
            registrable_root("mail.corp.example.com"),
            Some("example.com".to_string())
        );
        assert_eq!(
            registrable_root("a.b.example.com"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_registrable_root_of_root_domain() {
        assert_eq!(registrable_root("example.com"), None);
    }

    #[test]
    fn test_root_fallback_adopts_root_records() {
        // Subdomain a.b.example.com has no direct records but the root has
        // MX: the record set reflects the root's records with the flag set.
        let root = MxAQuery {
            mx_hosts: vec!["mx1.example.com.".to_string()],
            has_a: true,
            ..Default::default()
        };
        let folded = fold_root_fallback(DnsRecordSet::default(), root);
        assert_eq!(folded.mx_hosts, vec!["mx1.example.com.".to_string()]);
        assert!(folded.has_a);
        assert!(folded.used_root_fallback);
        assert!(!folded.timed_out);
    }

    #[test]
    fn test_root_fallback_with_empty_root_changes_nothing() {
        let folded = fold_root_fallback(DnsRecordSet::default(), MxAQuery::default());
        assert!(folded.is_empty());
        assert!(!folded.used_root_fallback);
    }

    #[test]
    fn test_root_fallback_carries_timeout() {
        let root = MxAQuery {
            timed_out: true,
            ..Default::default()
        };
        let folded = fold_root_fallback(DnsRecordSet::default(), root);
        assert!(folded.timed_out);
        assert!(!folded.used_root_fallback);
    }

    #[test]
    fn test_root_fallback_keeps_direct_failure_over_root_failure() {
        let direct = DnsRecordSet {
            failure: Some("SERVFAIL on example.com".to_string()),
            ..Default::default()
        };
        let root = MxAQuery {
            failure: Some("SERVFAIL on root".to_string()),
            ..Default::default()
        };
        let folded = fold_root_fallback(direct, root);
        assert_eq!(folded.failure.as_deref(), Some("SERVFAIL on example.com"));
    }

    #[test]
    fn test_record_failure_keeps_first_resolver_message() {
        let mut query = MxAQuery::default();
        record_failure(&mut query, DnsError::Resolver("SERVFAIL".to_string()));
        record_failure(&mut query, DnsError::Resolver("refused".to_string()));
        record_failure(&mut query, DnsError::Timeout);
        assert_eq!(query.failure.as_deref(), Some("SERVFAIL"));
        assert!(query.timed_out);
    }

    #[test]
    fn test_record_set_emptiness() {
        let empty = DnsRecordSet::default();
        assert!(empty.is_empty());
        assert!(!empty.has_mx());

        let with_mx = DnsRecordSet {
            mx_hosts: vec!["mx1.example.com.".to_string()],
            ..Default::default()
        };
        assert!(!with_mx.is_empty());
        assert!(with_mx.has_mx());

        let with_a = DnsRecordSet {
            has_a: true,
            ..Default::default()
        };
        assert!(!with_a.is_empty());
    }
}
