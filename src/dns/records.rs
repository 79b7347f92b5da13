//! DNS record queries (MX, A, TXT).
//!
//! Each query maps "no records found" and NXDOMAIN to an empty result;
//! genuine resolver failures (timeouts, network errors) surface as
//! [`DnsError`] so the caller can isolate them per record type.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::DnsError;

/// Maps a resolver error to either "no records" (Ok) or a real failure.
fn empty_on_no_records(domain: &str, record_type: &str, e: ResolveError) -> Result<(), DnsError> {
    match e.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => Ok(()),
        ResolveErrorKind::Timeout => {
            log::warn!("{record_type} record lookup timed out for {domain}");
            Err(DnsError::Timeout)
        }
        _ => {
            log::warn!("Failed to lookup {record_type} records for {domain}: {e}");
            Err(DnsError::Resolver(e.to_string()))
        }
    }
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Returns
///
/// Exchange hostnames ordered by preference (lower preference first), or
/// an empty vector if the domain has no mail servers.
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, DnsError> {
    match resolver.mx_lookup(domain).await {
        Ok(lookup) => {
            let mut records: Vec<(u16, String)> = lookup
                .iter()
                .map(|mx| (mx.preference(), mx.exchange().to_utf8()))
                .collect();
            records.sort_by_key(|(preference, _)| *preference);
            Ok(records.into_iter().map(|(_, host)| host).collect())
        }
        Err(e) => empty_on_no_records(domain, "MX", e).map(|()| Vec::new()),
    }
}

/// Checks whether a domain has any A records.
pub async fn lookup_a_record(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<bool, DnsError> {
    match resolver.ipv4_lookup(domain).await {
        Ok(lookup) => Ok(lookup.iter().next().is_some()),
        Err(e) => empty_on_no_records(domain, "A", e).map(|()| false),
    }
}

/// Queries TXT (text) records for a domain.
///
/// TXT records can contain multiple character strings; each record's
/// strings are joined into one value.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, DnsError> {
    match resolver.txt_lookup(domain).await {
        Ok(lookup) => {
            let records: Vec<String> = lookup
                .iter()
                .map(|txt| {
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                        .collect::<Vec<String>>()
                        .join("")
                })
                .collect();
            Ok(records)
        }
        Err(e) => empty_on_no_records(domain, "TXT", e).map(|()| Vec::new()),
    }
}
