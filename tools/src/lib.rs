//! Console helpers shared by the fixture generator binaries.
//!
//! - `csv-fixture` writes `test-fixtures/valid/sample-10mb.csv`
//! - `svg-fixture` writes `test-fixtures/valid/sample-1mb.svg`
//!
//! Both take no required arguments and print human-readable progress to
//! stdout. Diagnostics go to stderr through `tracing`, filtered by
//! `RUST_LOG` (default `warn`).

use tracing_subscriber::EnvFilter;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Installs the stderr `tracing` subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Formats a byte count as mebibytes with a fixed number of decimals.
#[allow(clippy::cast_precision_loss)]
pub fn format_megabytes(bytes: u64, decimals: usize) -> String {
    format!("{:.*}", decimals, bytes as f64 / BYTES_PER_MEGABYTE)
}

/// Formats a count with comma thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
