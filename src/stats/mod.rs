//! Column statistics.
//!
//! Mean, median, mode and population standard deviation over a slice of
//! numbers. The functions are generic over [`Sample`], which is implemented
//! for `i32`, `i64`, `f32` and `f64`. The mean of integer samples uses integer
//! arithmetic and truncates toward zero; floating samples keep the fractional
//! part. Median and standard deviation are always returned as `f64`.
//!
//! [`median`] and [`mode`] sort their input in place, so the slice is
//! reordered after the call.
//!
//! # Example
//!
//! ```
//! use framemetrics::stats;
//!
//! let mut xs = vec![3.0, 1.0, 4.0, 2.0];
//! assert_eq!(stats::mean(&xs)?, 2.5);
//! assert_eq!(stats::median(&mut xs)?, 2.5);
//! assert_eq!(xs, [1.0, 2.0, 3.0, 4.0]);
//! # Ok::<(), framemetrics::FrameMetricsError>(())
//! ```

mod report;
mod sample;

pub use report::ColumnSummary;
pub use sample::Sample;

use crate::error::{FrameMetricsError, Result};
use crate::metrics::{MetricField, MetricRecord};

/// Arithmetic mean of `xs` in the sample type's own arithmetic.
///
/// # Errors
/// Returns [`FrameMetricsError::EmptyInput`] if `xs` is empty.
pub fn mean<T: Sample>(xs: &[T]) -> Result<T> {
    if xs.is_empty() {
        return Err(FrameMetricsError::EmptyInput { statistic: "mean" });
    }
    Ok(T::mean_of(xs))
}

/// Median of `xs`, sorting it ascending in place.
///
/// For an odd count this is the middle element. For an even count it is the
/// arithmetic mean of the two elements either side of the middle, so
/// `[1, 2, 3, 4]` gives `2.5` for integer input too.
///
/// # Errors
/// Returns [`FrameMetricsError::InsufficientInput`] if `xs` has fewer than
/// two elements.
pub fn median<T: Sample>(xs: &mut [T]) -> Result<f64> {
    let n = xs.len();
    if n < 2 {
        return Err(FrameMetricsError::InsufficientInput {
            statistic: "median",
            required: 2,
            found: n,
        });
    }

    xs.sort_by(T::total_cmp);
    let mid = n / 2;
    if n % 2 == 1 {
        Ok(xs[mid].to_f64())
    } else {
        Ok((xs[mid - 1].to_f64() + xs[mid].to_f64()) / 2.0)
    }
}

/// Most frequent value of `xs`, sorting it ascending in place.
///
/// When several values share the highest count, the smallest one wins.
///
/// # Errors
/// Returns [`FrameMetricsError::EmptyInput`] if `xs` is empty.
pub fn mode<T: Sample>(xs: &mut [T]) -> Result<T> {
    if xs.is_empty() {
        return Err(FrameMetricsError::EmptyInput { statistic: "mode" });
    }

    xs.sort_by(T::total_cmp);

    let mut best = xs[0];
    let mut best_count = 0usize;
    for run in xs.chunk_by(|a, b| a.total_cmp(b).is_eq()) {
        if run.len() > best_count {
            best = run[0];
            best_count = run.len();
        }
    }
    Ok(best)
}

/// Population standard deviation of `xs`.
///
/// Deviations are taken from [`mean`] of the same slice (so integer input
/// uses the truncated integer mean) and accumulated in `f64`.
///
/// # Errors
/// Returns [`FrameMetricsError::EmptyInput`] if `xs` is empty.
pub fn standard_deviation<T: Sample>(xs: &[T]) -> Result<f64> {
    if xs.is_empty() {
        return Err(FrameMetricsError::EmptyInput {
            statistic: "standard deviation",
        });
    }

    let mean = mean(xs)?.to_f64();
    let sum_sq: f64 = xs
        .iter()
        .map(|x| {
            let d = x.to_f64() - mean;
            d * d
        })
        .sum();
    Ok((sum_sq / xs.len() as f64).sqrt())
}

/// Extracts one field of every record, in record order.
pub fn column(records: &[MetricRecord], field: MetricField) -> Vec<i32> {
    records.iter().map(|r| r.get(field)).collect()
}

/// Computes all four statistics for one column.
///
/// `values` is left unmodified; sorting happens on a private copy.
///
/// # Errors
/// Returns [`FrameMetricsError::InsufficientInput`] if fewer than two values
/// are supplied (the median's minimum).
pub fn summarize<T: Sample>(values: &[T]) -> Result<ColumnSummary<T>> {
    let mut sorted = values.to_vec();
    let median = median(&mut sorted)?;
    let mode = mode(&mut sorted)?;

    Ok(ColumnSummary {
        count: values.len(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        mean: mean(values)?,
        median,
        mode,
        std_dev: standard_deviation(values)?,
    })
}

/// Computes [`summarize`] over one field of a record sequence.
pub fn summarize_field(
    records: &[MetricRecord],
    field: MetricField,
) -> Result<ColumnSummary<i32>> {
    log::debug!("summarizing {} over {} record(s)", field, records.len());
    summarize(&column(records, field))
}
