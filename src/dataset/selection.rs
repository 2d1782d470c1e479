//! Position selection for strided, limited loads.

use crate::error::{FrameMetricsError, Result};

/// Listing positions visited when taking every `stride`-th of the first
/// `limit` entries of a `len`-entry listing.
///
/// `limit == 0` or `limit > len` keeps the whole listing.
///
/// # Errors
/// Returns [`FrameMetricsError::InvalidStride`] if `stride` is 0.
///
/// # Example
/// ```
/// use framemetrics::dataset::select_positions;
///
/// assert_eq!(select_positions(7, 3, 0)?, [0, 3, 6]);
/// assert_eq!(select_positions(7, 3, 5)?, [0, 3]);
/// # Ok::<(), framemetrics::FrameMetricsError>(())
/// ```
pub fn select_positions(len: usize, stride: usize, limit: usize) -> Result<Vec<usize>> {
    if stride == 0 {
        return Err(FrameMetricsError::InvalidStride { stride });
    }

    let end = if limit == 0 { len } else { limit.min(len) };
    Ok((0..end).step_by(stride).collect())
}
