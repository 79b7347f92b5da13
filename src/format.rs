//! Domain format validation.
//!
//! A pure structural check on candidate domain strings, run before any
//! network activity. Rejection here short-circuits classification to
//! `Invalid`/"invalid_format" without touching the network.

use crate::config::{MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};

/// Checks that a raw input string is a syntactically plausible domain.
///
/// Accepts only bare hostnames: labels of letters, digits, and hyphens
/// (no leading/trailing hyphen, at most 63 chars each), joined by dots,
/// at least two labels, at most 253 chars overall, and a TLD-like final
/// label of at least two chars starting with a letter.
///
/// Rejects anything carrying a protocol (`://`), whitespace, or path
/// separators. Pure function, no I/O.
pub fn validate_format(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LENGTH {
        return false;
    }
    if domain.contains("://")
        || domain.contains('/')
        || domain.chars().any(|c| c.is_whitespace())
    {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    for label in &labels {
        if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
            return false;
        }
        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return false;
        }
    }

    // The final label must look like a TLD: two or more chars, leading letter.
    let tld = labels[labels.len() - 1];
    if tld.len() < 2 || !tld.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    true
}
