//! Numeric element types accepted by the statistics functions.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use serde::Serialize;

mod sealed {
    pub trait Sealed {}
}

/// A numeric type the statistics in this module can be computed over.
///
/// This trait is sealed; it is implemented for `i32`, `i64`, `f32` and `f64`.
pub trait Sample: Copy + PartialEq + Debug + Display + Serialize + sealed::Sealed {
    /// Mean of a non-empty slice in this type's arithmetic.
    fn mean_of(xs: &[Self]) -> Self;

    /// Total order used for sorting (NaNs sort after all numbers).
    fn total_cmp(&self, other: &Self) -> Ordering;

    fn to_f64(self) -> f64;
}

// Integers accumulate in i128 so the sum cannot overflow; the quotient always
// fits back into the source type.
macro_rules! impl_sample_int {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Sample for $t {
            fn mean_of(xs: &[Self]) -> Self {
                let sum: i128 = xs.iter().map(|&x| i128::from(x)).sum();
                (sum / xs.len() as i128) as $t
            }

            fn total_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_sample_float {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Sample for $t {
            fn mean_of(xs: &[Self]) -> Self {
                xs.iter().sum::<$t>() / xs.len() as $t
            }

            fn total_cmp(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }
    )*};
}

impl_sample_int!(i32, i64);
impl_sample_float!(f32, f64);
