//! DNS record extraction utilities.
//!
//! Picks SPF and DMARC values out of TXT record collections. These are
//! recorded for the operator's benefit only and never influence the
//! classification status.

/// Extracts an SPF record from TXT records.
///
/// SPF records start with "v=spf1". Returns the first one found.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| txt.trim().starts_with("v=spf1"))
        .map(|s| s.trim().to_string())
}

/// Extracts a DMARC record from TXT records (queried at `_dmarc.<domain>`).
///
/// DMARC records start with "v=DMARC1". Returns the first one found.
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| txt.trim().starts_with("v=DMARC1"))
        .map(|s| s.trim().to_string())
}
