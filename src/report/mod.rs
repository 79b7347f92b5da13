//! Run output: CSV sink, progress lines, and summary statistics.

mod csv;
mod progress;

pub use csv::{default_report_path, write_csv_report};
pub use progress::{log_domain_progress, log_rate, print_summary};
