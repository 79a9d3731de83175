//! Fixed generation constants for the markup fixture.

/// Sizing and layout for one markup fixture run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupConfig {
    /// Exact length of the output in bytes.
    pub target_bytes: usize,

    /// Number of drawable shapes appended after the prologue.
    pub element_count: u32,

    /// Shapes per grid row.
    pub grid_columns: u32,

    /// Distance between neighbouring shape anchors.
    pub cell_size: u32,

    /// Filler characters inside each padding comment.
    pub padding_fill: usize,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            // 1 MiB
            target_bytes: 1024 * 1024,
            element_count: 1000,
            grid_columns: 50,
            cell_size: 40,
            padding_fill: 1000,
        }
    }
}

impl MarkupConfig {
    /// Creates a configuration with a small target, suitable for tests.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            target_bytes: 8 * 1024,
            element_count: 10,
            grid_columns: 5,
            cell_size: 40,
            padding_fill: 100,
        }
    }

    /// Returns a copy with a different byte target.
    #[must_use]
    pub const fn with_target_bytes(mut self, target_bytes: usize) -> Self {
        self.target_bytes = target_bytes;
        self
    }
}
