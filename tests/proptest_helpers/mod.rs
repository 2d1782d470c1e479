#![allow(dead_code)]

use framemetrics::metrics::MetricRecord;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub const EPS_STD_DEV: f64 = 1e-9;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Seven arbitrary field values.
pub fn arb_fields() -> impl Strategy<Value = [i32; 7]> {
    prop::array::uniform7(any::<i32>())
}

/// A record with an ordered box inside a 4K frame and small relative metrics.
pub fn arb_record() -> impl Strategy<Value = MetricRecord> {
    (
        0i32..3840,
        0i32..2160,
        0i32..512,
        0i32..512,
        -64i32..64,
        -64i32..64,
        -64i32..64,
    )
        .prop_map(|(x, y, w, h, c, e, v)| {
            let mut record = MetricRecord::new(x, y, x + w, y + h);
            record.set_rel_centroid_x(c);
            record.set_rel_eccentricity_x(e);
            record.set_rel_velocity_x(v);
            record
        })
}

pub fn arb_records(max: usize) -> impl Strategy<Value = Vec<MetricRecord>> {
    prop::collection::vec(arb_record(), 1..=max)
}

/// Integers small enough that sums of a few hundred never leave f64's exact range.
pub fn arb_ints(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-100_000i32..100_000, min_len..=max_len)
}

pub fn arb_floats(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, min_len..=max_len)
}
