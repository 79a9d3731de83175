//! Fixed generation constants for the tabular fixture.

/// Sizing and field widths for one tabular fixture run.
///
/// The binaries always use [`TabularConfig::default`]; tests shrink the
/// target through [`TabularConfig::for_testing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularConfig {
    /// Stop once the output reaches at least this many bytes.
    pub target_bytes: u64,

    /// Report progress every this many rows. Zero disables reporting.
    pub progress_every: u64,

    /// Length of the random `name` field.
    pub name_len: usize,

    /// Length of the random local part of the `email` field.
    pub email_local_len: usize,

    /// Length of the random `description` field.
    pub description_len: usize,
}

impl Default for TabularConfig {
    fn default() -> Self {
        Self {
            // 10 MiB
            target_bytes: 10 * 1024 * 1024,
            progress_every: 10_000,
            name_len: 20,
            email_local_len: 10,
            description_len: 50,
        }
    }
}

impl TabularConfig {
    /// Creates a configuration with a small target, suitable for tests.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            target_bytes: 16 * 1024,
            progress_every: 50,
            name_len: 20,
            email_local_len: 10,
            description_len: 50,
        }
    }

    /// Returns a copy with a different byte target.
    #[must_use]
    pub const fn with_target_bytes(mut self, target_bytes: u64) -> Self {
        self.target_bytes = target_bytes;
        self
    }
}
