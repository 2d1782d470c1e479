//! Per-frame metric records.
//!
//! A [`MetricRecord`] holds one frame's bounding box in absolute pixel
//! coordinates plus three metrics expressed relative to the previous frame.
//! Records flatten to a fixed seven-value field sequence, which is the row
//! layout used by [`crate::table::TabularStore`].
//!
//! # Example
//!
//! ```
//! use framemetrics::metrics::MetricRecord;
//!
//! let record = MetricRecord::new(10, 20, 110, 220);
//! let fields = record.to_fields();
//! assert_eq!(fields, [10, 20, 110, 220, 0, 0, 0]);
//! assert_eq!(MetricRecord::from_values(&fields)?, record);
//! # Ok::<(), framemetrics::FrameMetricsError>(())
//! ```

mod field;
mod record;

pub use field::MetricField;
pub use record::{MetricRecord, FIELD_COUNT};
