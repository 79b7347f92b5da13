//! CSV report writing.
//!
//! One row per input domain, written after collection by a single writer
//! so concurrent workers never interleave output. The default filename
//! embeds a generation timestamp to avoid clobbering prior runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::Writer;

use crate::classify::ValidationResult;

/// Builds the default timestamped report path, e.g.
/// `domain_validation_results_20260830-141502.csv`.
pub fn default_report_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    PathBuf::from(format!("domain_validation_results_{timestamp}.csv"))
}

/// Writes the classification results to a CSV file with a header row.
///
/// Columns: DOMAIN, MX_RECORD, A_RECORD, SITE_LIVE, PARKED_DOMAIN,
/// SPF_RECORD, DMARC_RECORD, STATUS, NOTES. The SPF/DMARC columns are
/// informational only.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub fn write_csv_report(path: &Path, results: &[ValidationResult]) -> Result<()> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    writer.write_record([
        "DOMAIN",
        "MX_RECORD",
        "A_RECORD",
        "SITE_LIVE",
        "PARKED_DOMAIN",
        "SPF_RECORD",
        "DMARC_RECORD",
        "STATUS",
        "NOTES",
    ])?;

    for result in results {
        let status = result.status.to_string();
        writer.write_record([
            result.domain.as_str(),
            bool_field(result.dns.has_mx()),
            bool_field(result.dns.has_a),
            bool_field(result.connectivity.is_live),
            bool_field(result.parking.parked),
            result.dns.spf.as_deref().unwrap_or(""),
            result.dns.dmarc.as_deref().unwrap_or(""),
            status.as_str(),
            result.notes.as_str(),
        ])?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

fn bool_field(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
