//! Integration tests for the CSV table store.

use std::fs;

use framemetrics::metrics::MetricRecord;
use framemetrics::table::{TableConfig, TabularStore};
use framemetrics::FrameMetricsError;

fn store_in(dir: &std::path::Path) -> TabularStore {
    TabularStore::new(TableConfig {
        folder: dir.to_path_buf(),
        ..Default::default()
    })
}

fn sample_records() -> Vec<MetricRecord> {
    let mut second = MetricRecord::new(12, 22, 64, 90);
    second.set_rel_centroid_x(2);
    second.set_rel_eccentricity_x(-1);
    second.set_rel_velocity_x(5);

    vec![
        MetricRecord::new(10, 20, 60, 88),
        second,
        MetricRecord::from_values(&[15, 21, 70, 91, 3, 0, -4]).unwrap(),
    ]
}

#[test]
fn records_roundtrip_through_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_in(dir.path());

    let records = sample_records();
    store.write_records(&records).expect("write records");

    let restored: Vec<MetricRecord> = store
        .read_rows_as_ints()
        .expect("read ints")
        .iter()
        .map(|row| MetricRecord::from_values(row).expect("record"))
        .collect();
    assert_eq!(restored, records);
    assert_eq!(store.read_records().unwrap(), records);
}

#[test]
fn manual_session_writes_decimal_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_in(dir.path());

    store.open_write_session().unwrap();
    assert!(store.is_session_open());
    store.write_row(&[1, -2, 30]).unwrap();
    store.write_row(&[4, 5, 6]).unwrap();
    store.close_write_session().unwrap();
    assert!(!store.is_session_open());

    let text = fs::read_to_string(dir.path().join("boundingBoxes.csv")).unwrap();
    assert_eq!(text, "1,-2,30\n4,5,6\n");

    let rows = store.read_rows().unwrap();
    assert_eq!(rows[0], ["1", "-2", "30"]);
}

#[test]
fn opening_a_session_truncates_previous_contents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_in(dir.path());

    store.write_records(&sample_records()).unwrap();
    store.write_records(&[MetricRecord::new(1, 1, 2, 2)]).unwrap();

    assert_eq!(store.read_records().unwrap().len(), 1);
}

#[test]
fn second_open_session_is_invalid_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_in(dir.path());

    store.open_write_session().unwrap();
    assert!(matches!(
        store.open_write_session(),
        Err(FrameMetricsError::SessionAlreadyOpen { .. })
    ));
    store.close_write_session().unwrap();
    assert!(matches!(
        store.close_write_session(),
        Err(FrameMetricsError::NoOpenSession)
    ));
}

#[test]
fn session_creates_missing_folder() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_in(&dir.path().join("a").join("b"));
    store.set_file_name("tracks");

    store.write_records(&sample_records()).unwrap();
    assert!(dir.path().join("a/b/tracks.csv").is_file());
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(dir.path());

    assert!(matches!(
        store.read_rows(),
        Err(FrameMetricsError::FileNotFound { .. })
    ));
    assert!(matches!(
        store.read_rows_as_ints(),
        Err(FrameMetricsError::FileNotFound { .. })
    ));
}

#[test]
fn short_second_row_is_malformed_data() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("boundingBoxes.csv"),
        "1,2,3,4,5,6,7\n1,2,3,4,5,6\n",
    )
    .unwrap();

    let store = store_in(dir.path());
    let err = store.read_rows_as_ints().unwrap_err();
    assert!(matches!(
        err,
        FrameMetricsError::RowWidthMismatch {
            row: 1,
            expected: 7,
            found: 6,
            ..
        }
    ));

    // Text rows are still readable as-is.
    assert_eq!(store.read_rows().unwrap()[1].len(), 6);
}

#[test]
fn ragged_rows_are_written_whole_and_rejected_on_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_in(dir.path());

    store.open_write_session().unwrap();
    store.write_row(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
    store.write_row(&[1, 2, 3, 4, 5, 6]).unwrap();
    store.close_write_session().unwrap();

    let text = fs::read_to_string(dir.path().join("boundingBoxes.csv")).unwrap();
    assert_eq!(text, "1,2,3,4,5,6,7\n1,2,3,4,5,6\n");

    assert!(matches!(
        store.read_rows_as_ints(),
        Err(FrameMetricsError::RowWidthMismatch {
            row: 1,
            expected: 7,
            found: 6,
            ..
        })
    ));
}

#[cfg(target_os = "linux")]
#[test]
fn failed_record_write_releases_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::os::unix::fs::symlink("/dev/full", dir.path().join("boundingBoxes.csv"))
        .expect("symlink");
    let mut store = store_in(dir.path());
    let records = vec![MetricRecord::new(1000, 2000, 3000, 4000); 4096];

    let result = store.write_records(&records);

    assert!(matches!(result, Err(FrameMetricsError::CsvWrite { .. })));
    assert!(!store.is_session_open());
}

#[test]
fn non_numeric_field_is_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("boundingBoxes.csv"), "1,2\nthree,4\n").unwrap();

    let store = store_in(dir.path());
    assert!(matches!(
        store.read_rows_as_ints(),
        Err(FrameMetricsError::FieldParse {
            row: 1,
            column: 0,
            ..
        })
    ));
}

#[test]
fn narrow_rows_do_not_make_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("boundingBoxes.csv"), "1,2,3\n4,5,6\n").unwrap();

    let store = store_in(dir.path());
    assert!(matches!(
        store.read_records(),
        Err(FrameMetricsError::RecordFieldCount {
            expected: 7,
            found: 3
        })
    ));
}
