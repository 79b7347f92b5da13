//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_verdict` library that handles
//! command-line argument parsing, logger initialization, and user-facing
//! output formatting. All core functionality lives in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_verdict::initialization::init_logger_with;
use domain_verdict::{run_batch, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_batch(config).await {
        Ok(report) => {
            println!(
                "Classified {} domain{}: {} valid, {} invalid, {} risky in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "s" },
                report.valid,
                report.invalid,
                report.risky,
                report.elapsed_seconds
            );
            println!("Results saved to {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_verdict error: {e:#}");
            process::exit(1);
        }
    }
}
