//! Size-bounded row emission.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use csv::WriterBuilder;
use rand::Rng;

use crate::config::TabularConfig;
use crate::record::{RecordSource, EMAIL_DOMAIN, HEADER};

/// Default output location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "test-fixtures/valid/sample-10mb.csv";

/// A progress checkpoint, reported every `progress_every` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub rows: u64,
    pub bytes: u64,
}

/// Final statistics for one generated fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabularSummary {
    /// Data rows written, excluding the header.
    pub rows: u64,
    /// Total bytes written, including the header.
    pub bytes: u64,
}

/// Counts every byte that reaches the inner writer.
struct Tally<W> {
    inner: W,
    bytes: u64,
}

impl<W: Write> Write for Tally<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.bytes += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Writes the header and then rows until at least `target_bytes` have been
/// written.
///
/// The byte count is taken after each row is flushed, the same position a
/// file handle would report, so the output overshoots the target by less
/// than one row.
pub fn write_rows<W, R, F>(
    writer: W,
    config: &TabularConfig,
    source: &mut RecordSource<R>,
    mut on_progress: F,
) -> io::Result<TabularSummary>
where
    W: Write,
    R: Rng,
    F: FnMut(Progress),
{
    let mut csv = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Tally {
            inner: writer,
            bytes: 0,
        });

    csv.write_record(HEADER)?;
    csv.flush()?;

    let mut rows = 0u64;
    let mut bytes = csv.get_ref().bytes;
    while bytes < config.target_bytes {
        let record = source.next_record();
        csv.serialize(&record)?;
        csv.flush()?;
        rows += 1;
        bytes = csv.get_ref().bytes;

        if config.progress_every > 0 && rows % config.progress_every == 0 {
            on_progress(Progress { rows, bytes });
        }
    }

    Ok(TabularSummary { rows, bytes })
}

/// Generates the fixture at `path`, creating parent directories and
/// replacing any existing file.
///
/// Errors are returned as-is; a partially written file is left in place.
pub fn generate_file<R, F>(
    path: &Path,
    config: &TabularConfig,
    rng: R,
    on_progress: F,
) -> io::Result<TabularSummary>
where
    R: Rng,
    F: FnMut(Progress),
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    tracing::debug!(
        path = %path.display(),
        target_bytes = config.target_bytes,
        "writing tabular fixture"
    );

    let mut source = RecordSource::new(rng, config);
    let summary = write_rows(file, config, &mut source, on_progress)?;

    tracing::debug!(
        rows = summary.rows,
        bytes = summary.bytes,
        "tabular fixture complete"
    );
    Ok(summary)
}

/// Upper bound on the serialized length of the row with the given id,
/// terminator included.
pub fn max_row_bytes(config: &TabularConfig, id: u64) -> u64 {
    let id_digits = id.checked_ilog10().unwrap_or(0) as usize + 1;
    let fields = [
        id_digits,
        config.name_len,
        config.email_local_len + 1 + EMAIL_DOMAIN.len(),
        "10000".len(),
        "2025-12-28".len(),
        config.description_len,
        1,
        "inactive".len(),
    ];
    let separators = HEADER.len() - 1;
    (fields.iter().sum::<usize>() + separators + 1) as u64
}
