//! The per-frame metric record.

use serde::{Deserialize, Serialize};

use super::field::MetricField;
use crate::error::{FrameMetricsError, Result};

/// Number of values in a serialized [`MetricRecord`].
pub const FIELD_COUNT: usize = 7;

/// Bounding box and relative motion metrics for a single frame.
///
/// The box is expected to satisfy `abs_end_x >= abs_start_x` and
/// `abs_end_y >= abs_start_y`, but this is not enforced here so that
/// malformed boxes read from disk can still be represented and inspected
/// (see [`MetricRecord::is_ordered`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricRecord {
    abs_start_x: i32,
    abs_start_y: i32,
    abs_end_x: i32,
    abs_end_y: i32,
    rel_centroid_x: i32,
    rel_eccentricity_x: i32,
    rel_velocity_x: i32,
}

impl MetricRecord {
    /// Creates a record from absolute box corners. Relative metrics start at 0.
    pub fn new(abs_start_x: i32, abs_start_y: i32, abs_end_x: i32, abs_end_y: i32) -> Self {
        Self {
            abs_start_x,
            abs_start_y,
            abs_end_x,
            abs_end_y,
            ..Default::default()
        }
    }

    /// Builds a record from already-parsed values in serialization order.
    ///
    /// Only the first [`FIELD_COUNT`] values are used; extra trailing values
    /// are ignored.
    ///
    /// # Errors
    /// Returns [`FrameMetricsError::RecordFieldCount`] if fewer than
    /// [`FIELD_COUNT`] values are supplied.
    pub fn from_values(values: &[i32]) -> Result<Self> {
        let v: &[i32; FIELD_COUNT] = values
            .get(..FIELD_COUNT)
            .and_then(|head| head.try_into().ok())
            .ok_or(FrameMetricsError::RecordFieldCount {
                expected: FIELD_COUNT,
                found: values.len(),
            })?;

        Ok(Self {
            abs_start_x: v[0],
            abs_start_y: v[1],
            abs_end_x: v[2],
            abs_end_y: v[3],
            rel_centroid_x: v[4],
            rel_eccentricity_x: v[5],
            rel_velocity_x: v[6],
        })
    }

    /// Parses a record from text fields in serialization order.
    ///
    /// Surrounding whitespace in each field is ignored.
    ///
    /// # Errors
    /// Returns [`FrameMetricsError::RecordFieldCount`] if fewer than
    /// [`FIELD_COUNT`] fields are supplied, or
    /// [`FrameMetricsError::RecordFieldParse`] naming the first field that is
    /// not an integer.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self> {
        if fields.len() < FIELD_COUNT {
            return Err(FrameMetricsError::RecordFieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }

        let mut values = [0i32; FIELD_COUNT];
        for (index, (slot, raw)) in values.iter_mut().zip(fields).enumerate() {
            let raw: &str = raw.as_ref();
            *slot = raw
                .trim()
                .parse()
                .map_err(|source| FrameMetricsError::RecordFieldParse {
                    index,
                    value: raw.to_string(),
                    source,
                })?;
        }

        Self::from_values(&values)
    }

    /// Returns all seven values in serialization order.
    pub fn to_fields(&self) -> [i32; FIELD_COUNT] {
        [
            self.abs_start_x,
            self.abs_start_y,
            self.abs_end_x,
            self.abs_end_y,
            self.rel_centroid_x,
            self.rel_eccentricity_x,
            self.rel_velocity_x,
        ]
    }

    /// Reads a field by identifier.
    pub fn get(&self, field: MetricField) -> i32 {
        self.to_fields()[field.index()]
    }

    /// Writes a field by identifier.
    pub fn set(&mut self, field: MetricField, value: i32) {
        match field {
            MetricField::AbsStartX => self.abs_start_x = value,
            MetricField::AbsStartY => self.abs_start_y = value,
            MetricField::AbsEndX => self.abs_end_x = value,
            MetricField::AbsEndY => self.abs_end_y = value,
            MetricField::RelCentroidX => self.rel_centroid_x = value,
            MetricField::RelEccentricityX => self.rel_eccentricity_x = value,
            MetricField::RelVelocityX => self.rel_velocity_x = value,
        }
    }

    pub fn abs_start_x(&self) -> i32 {
        self.abs_start_x
    }

    pub fn abs_start_y(&self) -> i32 {
        self.abs_start_y
    }

    pub fn abs_end_x(&self) -> i32 {
        self.abs_end_x
    }

    pub fn abs_end_y(&self) -> i32 {
        self.abs_end_y
    }

    pub fn rel_centroid_x(&self) -> i32 {
        self.rel_centroid_x
    }

    pub fn rel_eccentricity_x(&self) -> i32 {
        self.rel_eccentricity_x
    }

    pub fn rel_velocity_x(&self) -> i32 {
        self.rel_velocity_x
    }

    pub fn set_abs_start_x(&mut self, value: i32) {
        self.abs_start_x = value;
    }

    pub fn set_abs_start_y(&mut self, value: i32) {
        self.abs_start_y = value;
    }

    pub fn set_abs_end_x(&mut self, value: i32) {
        self.abs_end_x = value;
    }

    pub fn set_abs_end_y(&mut self, value: i32) {
        self.abs_end_y = value;
    }

    pub fn set_rel_centroid_x(&mut self, value: i32) {
        self.rel_centroid_x = value;
    }

    pub fn set_rel_eccentricity_x(&mut self, value: i32) {
        self.rel_eccentricity_x = value;
    }

    pub fn set_rel_velocity_x(&mut self, value: i32) {
        self.rel_velocity_x = value;
    }

    /// Box width (`abs_end_x - abs_start_x`).
    ///
    /// May be negative if the box is malformed.
    #[inline]
    pub fn width(&self) -> i64 {
        i64::from(self.abs_end_x) - i64::from(self.abs_start_x)
    }

    /// Box height (`abs_end_y - abs_start_y`).
    ///
    /// May be negative if the box is malformed.
    #[inline]
    pub fn height(&self) -> i64 {
        i64::from(self.abs_end_y) - i64::from(self.abs_start_y)
    }

    /// Returns true if end coordinates are not before start coordinates.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.abs_start_x <= self.abs_end_x && self.abs_start_y <= self.abs_end_y
    }
}

impl TryFrom<&[i32]> for MetricRecord {
    type Error = FrameMetricsError;

    fn try_from(values: &[i32]) -> Result<Self> {
        Self::from_values(values)
    }
}

impl From<MetricRecord> for [i32; FIELD_COUNT] {
    fn from(record: MetricRecord) -> Self {
        record.to_fields()
    }
}
