//! domain_verdict library: bulk domain classification.
//!
//! Classifies candidate domains as Valid, Invalid, or Risky for email or
//! web purposes by combining DNS lookups, liveness probes, and heuristic
//! parked-domain detection, and writes one CSV row per input domain.
//!
//! # Example
//!
//! ```no_run
//! use domain_verdict::{run_batch, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("domains.txt"),
//!     workers: 20,
//!     ..Default::default()
//! };
//!
//! let report = run_batch(config).await?;
//! println!(
//!     "{} domains: {} valid, {} invalid, {} risky",
//!     report.total, report.valid, report.invalid, report.risky
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions within an async context.

#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod connectivity;
pub mod dns;
mod error_handling;
pub mod format;
pub mod initialization;
pub mod parking;
pub mod report;

// Re-export public API
pub use classify::{DomainClassifier, Status, ValidationResult};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{DnsError, InitializationError};
pub use run::{run_batch, BatchReport};

/// Parses a raw domain-list file into candidate domains.
///
/// Trims whitespace, skips blank lines and `#` comments, and lowercases
/// each surviving line. No deduplication or further normalization.
pub fn parse_domain_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

// Internal run module (contains the batch processing logic)
mod run {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{info, warn};
    use tokio_util::sync::CancellationToken;

    use crate::classify::{
        DomainClassifier, HickoryDns, HttpProber, Status, ValidationResult,
    };
    use crate::config::{Config, PROGRESS_LOG_INTERVAL_SECS, SOCKET_TIMEOUT_SECS};
    use crate::connectivity::ConnectivityResult;
    use crate::dns::DnsRecordSet;
    use crate::initialization::{init_client, init_resolver, init_semaphore};
    use crate::parking::{ParkingDetector, ParkingPatterns, ParkingReason, ParkingVerdict};
    use crate::report;

    /// Results of a batch classification run.
    #[derive(Debug, Clone)]
    pub struct BatchReport {
        /// Total number of domains classified
        pub total: usize,
        /// Domains classified Valid
        pub valid: usize,
        /// Domains classified Invalid
        pub invalid: usize,
        /// Domains classified Risky
        pub risky: usize,
        /// Path of the written CSV report
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a batch classification with the provided configuration.
    ///
    /// Reads the domain list, classifies every domain with a bounded pool
    /// of concurrent workers, writes the CSV report, and logs a summary.
    /// Individual domain failures never fail the batch; each becomes a row
    /// with an explanatory note.
    ///
    /// # Errors
    ///
    /// Fails only for setup problems: unreadable input file, HTTP client
    /// initialization failure, or an unwritable output path.
    pub async fn run_batch(config: Config) -> Result<BatchReport> {
        let contents = tokio::fs::read_to_string(&config.file)
            .await
            .with_context(|| format!("Failed to read input file: {}", config.file.display()))?;
        let domains = crate::parse_domain_lines(&contents);
        info!(
            "Loaded {} domains from {}",
            domains.len(),
            config.file.display()
        );

        let resolver = init_resolver();
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let classifier = Arc::new(DomainClassifier::new(
            Arc::new(HickoryDns::new(resolver)),
            Arc::new(HttpProber::new(
                client,
                Duration::from_secs(SOCKET_TIMEOUT_SECS),
            )),
            Arc::new(ParkingDetector::new(ParkingPatterns::default())),
        ));

        let start_time = std::time::Instant::now();
        let results = classify_all(classifier, &domains, config.workers).await;

        let output_path = config.output.clone().unwrap_or_else(report::default_report_path);
        report::write_csv_report(&output_path, &results)?;
        info!("Results saved to {}", output_path.display());

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        report::print_summary(&results, elapsed_seconds);

        let count = |status: Status| results.iter().filter(|r| r.status == status).count();
        Ok(BatchReport {
            total: results.len(),
            valid: count(Status::Valid),
            invalid: count(Status::Invalid),
            risky: count(Status::Risky),
            output_path,
            elapsed_seconds,
        })
    }

    /// Classifies all domains with bounded concurrency, returning results
    /// in input order.
    ///
    /// An operator interrupt (Ctrl-C) stops dispatch of new domains;
    /// in-flight classifications complete or time out naturally, and
    /// domains never dispatched are reported as interrupted rows rather
    /// than silently dropped.
    async fn classify_all(
        classifier: Arc<DomainClassifier>,
        domains: &[String],
        workers: usize,
    ) -> Vec<ValidationResult> {
        let total = domains.len();
        let semaphore = init_semaphore(workers.max(1));
        let completed = Arc::new(AtomicUsize::new(0));

        let cancel = CancellationToken::new();
        {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupt received; finishing in-flight domains");
                    cancel.cancel();
                }
            });
        }

        let cancel_logging = cancel.child_token();
        let start_time = std::time::Instant::now();
        let completed_for_logging = Arc::clone(&completed);
        let logging_task = tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(PROGRESS_LOG_INTERVAL_SECS));
            interval.tick().await; // first tick fires immediately
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        report::log_rate(start_time, &completed_for_logging, total);
                    }
                    _ = cancel_logging.cancelled() => break,
                }
            }
        });

        let mut tasks = FuturesUnordered::new();
        for (index, domain) in domains.iter().enumerate() {
            if cancel.is_cancelled() {
                warn!("Skipping {} remaining domains", total - index);
                break;
            }
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => break,
            };
            let classifier = Arc::clone(&classifier);
            let domain = domain.clone();
            tasks.push(tokio::spawn(async move {
                let _permit = permit;
                let result = classifier.classify(&domain).await;
                (index, result)
            }));
        }

        let mut slots: Vec<Option<ValidationResult>> = vec![None; total];
        while let Some(joined) = tasks.next().await {
            match joined {
                Ok((index, result)) => {
                    let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                    report::log_domain_progress(done, total, &result);
                    slots[index] = Some(result);
                }
                Err(join_error) => {
                    warn!("Classification task panicked: {join_error}");
                }
            }
        }

        cancel.cancel();
        let _ = logging_task.await;

        // Domains that were never dispatched (interrupt) or whose task
        // panicked still get a row; no domain is silently dropped.
        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| error_result(&domains[index], "error: not classified"))
            })
            .collect()
    }

    fn error_result(domain: &str, notes: &str) -> ValidationResult {
        ValidationResult {
            domain: domain.to_string(),
            dns: DnsRecordSet::default(),
            connectivity: ConnectivityResult::default(),
            parking: ParkingVerdict {
                parked: false,
                reason: ParkingReason::None,
                detail: None,
            },
            status: Status::Invalid,
            notes: notes.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_domain_lines;

    #[test]
    fn test_parse_domain_lines_skips_blanks_and_comments() {
        let input = "# header\n\nexample.com\n   \n# note\nother.org  \n";
        assert_eq!(parse_domain_lines(input), vec!["example.com", "other.org"]);
    }

    #[test]
    fn test_parse_domain_lines_lowercases() {
        assert_eq!(parse_domain_lines("EXAMPLE.com\n"), vec!["example.com"]);
    }
}
