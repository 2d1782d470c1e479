use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FrameMetricsError>;

/// The main error type for framemetrics operations.
#[derive(Debug, Error)]
pub enum FrameMetricsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Folder not found: {path}")]
    FolderNotFound { path: PathBuf },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to list folder {path}: {source}")]
    ListFolder {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image to {path}: {source}")]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read CSV from {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write CSV to {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid integer '{value}' in {path} at row {row}, column {column}: {source}")]
    FieldParse {
        path: PathBuf,
        row: usize,
        column: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Row {row} of {path} has {found} column(s), expected {expected}")]
    RowWidthMismatch {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Metric record needs {expected} fields, got {found}")]
    RecordFieldCount { expected: usize, found: usize },

    #[error("Metric record field {index} is not an integer: '{value}'")]
    RecordFieldParse {
        index: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Stride must be at least 1, got {stride}")]
    InvalidStride { stride: usize },

    #[error("A write session is already open for {path}")]
    SessionAlreadyOpen { path: PathBuf },

    #[error("Refusing to write an empty row to {path}")]
    EmptyRow { path: PathBuf },

    #[error("No write session is open")]
    NoOpenSession,

    #[error("Cannot compute {statistic} of an empty collection")]
    EmptyInput { statistic: &'static str },

    #[error("Cannot compute {statistic} of {found} value(s), need at least {required}")]
    InsufficientInput {
        statistic: &'static str,
        required: usize,
        found: usize,
    },
}
