//! Progress and summary reporting.
//!
//! Per-domain completion lines with distinct markers per status, periodic
//! rate logging, and the end-of-run summary block.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::info;

use crate::classify::{Status, ValidationResult};

/// Logs one completion line for a classified domain. `total` is the size
/// of the input list, so the counter still reads N-of-total after an
/// interrupt cut dispatch short.
pub fn log_domain_progress(completed: usize, total: usize, result: &ValidationResult) {
    info!("{}", progress_line(completed, total, result));
}

/// Formats one completion line.
///
/// Markers: ✅ Valid, ❌ Invalid, ⚠️ Risky.
fn progress_line(completed: usize, total: usize, result: &ValidationResult) -> String {
    let marker = match result.status {
        Status::Valid => "✅",
        Status::Invalid => "❌",
        Status::Risky => "⚠️",
    };
    format!(
        "[{completed}/{total}] {marker} {}: {} ({})",
        result.status, result.domain, result.notes
    )
}

/// Logs throughput since the start of the run.
pub fn log_rate(start_time: std::time::Instant, completed: &Arc<AtomicUsize>, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let done = completed.load(Ordering::SeqCst);
    let rate = if elapsed_secs > 0.0 {
        done as f64 / elapsed_secs
    } else {
        0.0
    };
    info!("Processed {done}/{total} domains in {elapsed_secs:.1}s (~{rate:.2} domains/sec)");
}

/// Prints the end-of-run summary: counts per status and per leading note
/// category.
pub fn print_summary(results: &[ValidationResult], elapsed_seconds: f64) {
    let mut by_status: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_note: BTreeMap<String, usize> = BTreeMap::new();
    for result in results {
        *by_status.entry(result.status.to_string()).or_default() += 1;
        *by_note.entry(note_category(&result.notes)).or_default() += 1;
    }

    info!("{}", "=".repeat(50));
    info!("Total domains: {}", results.len());
    for (status, count) in &by_status {
        info!("{status}: {count}");
    }
    for (category, count) in &by_note {
        info!("  {category}: {count}");
    }
    info!("Completed in {elapsed_seconds:.2} seconds");
}

/// Reduces a notes string to its leading category word for the summary,
/// e.g. "parked_domain (parking-keyword-in-content): ..." → "parked_domain".
fn note_category(notes: &str) -> String {
    notes
        .split(|c: char| c == ' ' || c == ';' || c == ':')
        .next()
        .unwrap_or("other")
        .to_string()
}
