//! Summary report for a single numeric column.

use serde::Serialize;
use std::fmt;

use super::Sample;

/// Mean, median, mode and spread of one column.
///
/// Produced by [`summarize`](super::summarize). Serializes to JSON for
/// programmatic use and renders as an aligned text block via `Display`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnSummary<T: Sample> {
    /// Number of values summarized.
    pub count: usize,
    pub min: T,
    pub max: T,
    pub mean: T,
    pub median: f64,
    pub mode: T,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl<T: Sample> fmt::Display for ColumnSummary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  count:    {:>12}", self.count)?;
        writeln!(f, "  min:      {:>12}", self.min)?;
        writeln!(f, "  max:      {:>12}", self.max)?;
        writeln!(f, "  mean:     {:>12}", self.mean)?;
        writeln!(f, "  median:   {:>12}", self.median)?;
        writeln!(f, "  mode:     {:>12}", self.mode)?;
        writeln!(f, "  std dev:  {:>12.3}", self.std_dev)
    }
}
