//! Size accounting for a compression batch.

use std::fmt;

/// Render a byte count as kilobytes with two decimals (1 KB = 1024 bytes).
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Before/after totals of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeSummary {
    pub total_original_size_bytes: u64,
    pub total_compressed_size_bytes: u64,
}

impl SizeSummary {
    /// `100 * (original - compressed) / original`.
    ///
    /// Negative when compression grew the data; `None` when there is no
    /// original data to compare against.
    pub fn reduction_percent(&self) -> Option<f64> {
        if self.total_original_size_bytes == 0 {
            return None;
        }
        let original = self.total_original_size_bytes as f64;
        let compressed = self.total_compressed_size_bytes as f64;
        Some(100.0 * (original - compressed) / original)
    }
}

impl fmt::Display for SizeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total Original Size: {}",
            format_kb(self.total_original_size_bytes)
        )?;
        writeln!(
            f,
            "Total Compressed Size: {}",
            format_kb(self.total_compressed_size_bytes)
        )?;
        match self.reduction_percent() {
            Some(pct) => write!(f, "Size Reduction: {pct:.2}%"),
            None => write!(f, "Size Reduction: n/a"),
        }
    }
}
