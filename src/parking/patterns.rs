//! Parked-domain heuristic pattern tables.
//!
//! These lists are a starting configuration, not a frozen contract: the
//! detector accepts any [`ParkingPatterns`] value, and the defaults here
//! track hosts and phrases observed on common parking services. All
//! entries are matched lowercase.

/// Immutable pattern tables consulted by the parking detector.
///
/// Built once at startup and shared read-only across workers.
#[derive(Debug, Clone)]
pub struct ParkingPatterns {
    /// Substrings of MX exchange hostnames used by parking services.
    pub mx_patterns: Vec<String>,
    /// URL/host fragments of parking services looked for in page content.
    pub service_urls: Vec<String>,
    /// Phrases typically shown on parked or for-sale pages.
    pub keywords: Vec<String>,
    /// Boilerplate phrases that mark registrar placeholder pages when the
    /// page is otherwise near-empty.
    pub placeholder_phrases: Vec<String>,
    /// Maximum stripped-body length (chars) for the placeholder check.
    pub placeholder_max_len: usize,
}

impl Default for ParkingPatterns {
    fn default() -> Self {
        Self {
            mx_patterns: to_strings(&[
                "park-mx.above.com",
                "sedoparking.com",
                "h-email.net",
                "parkingcrew.net",
                "bodis.com",
                "fabulous.com",
            ]),
            service_urls: to_strings(&[
                "sedoparking.com",
                "hugedomains.com/domain_profile",
                "godaddyparking.com",
                "parkingcrew.net",
                "parklogic.com",
                "fabulous.com/park",
                "bodis.com/parking",
                "register.com/domain",
                "registrar.godaddy.com",
                "networksolutions.com/manage-it",
                "domainsponsor",
                "domaincontrol.com",
                "namesilo.com/domain",
                "namedrive.com",
                "crazydomains.com",
                "buydomains.com",
                "parked.namecheap.com",
            ]),
            keywords: to_strings(&[
                "domain is for sale",
                "buy this domain",
                "domain parking",
                "parked domain",
                "domain may be for sale",
                "domain auction",
                "this web page is parked",
                "this domain is parked",
                "purchase this domain",
                "inquire about this domain",
                "domain broker",
                "domain for purchase",
                "related searches",
                "this domain is available",
                "pending renewal or deletion",
            ]),
            placeholder_phrases: to_strings(&[
                "coming soon",
                "whois lookup",
                "under construction",
                "domain registration",
                "future home of",
            ]),
            placeholder_max_len: 1000,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
