//! Fuzz target for metric record parsing from text fields.
//!
//! Splits the input on commas and parses the pieces as a record, checking
//! that any record that parses survives a round trip through its fields.

#![no_main]

use framemetrics::metrics::MetricRecord;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let fields: Vec<&str> = text.split(',').collect();
    if let Ok(record) = MetricRecord::from_fields(&fields) {
        let again = MetricRecord::from_values(&record.to_fields()).expect("seven values");
        assert_eq!(again, record);
    }
});
