//! Field identifiers in serialization order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven fields of a [`MetricRecord`](super::MetricRecord).
///
/// Variants are declared in the order the fields appear in a serialized row,
/// so [`MetricField::index`] is also the column index in a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    AbsStartX,
    AbsStartY,
    AbsEndX,
    AbsEndY,
    RelCentroidX,
    RelEccentricityX,
    RelVelocityX,
}

impl MetricField {
    /// All fields in serialization order.
    pub const ALL: [MetricField; 7] = [
        MetricField::AbsStartX,
        MetricField::AbsStartY,
        MetricField::AbsEndX,
        MetricField::AbsEndY,
        MetricField::RelCentroidX,
        MetricField::RelEccentricityX,
        MetricField::RelVelocityX,
    ];

    /// Column index of this field in a serialized row.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MetricField::AbsStartX => "abs_start_x",
            MetricField::AbsStartY => "abs_start_y",
            MetricField::AbsEndX => "abs_end_x",
            MetricField::AbsEndY => "abs_end_y",
            MetricField::RelCentroidX => "rel_centroid_x",
            MetricField::RelEccentricityX => "rel_eccentricity_x",
            MetricField::RelVelocityX => "rel_velocity_x",
        }
    }

    /// Whether the field is an absolute bounding-box coordinate.
    pub fn is_absolute(self) -> bool {
        matches!(
            self,
            MetricField::AbsStartX
                | MetricField::AbsStartY
                | MetricField::AbsEndX
                | MetricField::AbsEndY
        )
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
