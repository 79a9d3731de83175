//! Size-bounded synthetic CSV fixture generation.
//!
//! Emits a header row followed by randomly generated records until the
//! output reaches a byte target. Every row is flushed before the size is
//! checked, so the result is at least the target and exceeds it by less than
//! one row.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tabular::{write_rows, RecordSource, TabularConfig};
//!
//! let config = TabularConfig::for_testing().with_target_bytes(1024);
//! let mut source = RecordSource::new(StdRng::seed_from_u64(1), &config);
//! let mut out = Vec::new();
//! let summary = write_rows(&mut out, &config, &mut source, |_| {}).unwrap();
//! assert!(summary.bytes >= 1024);
//! ```

mod config;
mod record;
mod writer;

pub use config::TabularConfig;
pub use record::{
    alphanumeric, CalendarDay, Category, RecordSource, Status, SyntheticRecord, DATE_YEAR,
    EMAIL_DOMAIN, HEADER, VALUE_MAX, VALUE_MIN,
};
pub use writer::{
    generate_file, max_row_bytes, write_rows, Progress, TabularSummary, DEFAULT_OUTPUT_PATH,
};
