//! Comma-delimited integer tables.
//!
//! [`TabularStore`] reads and writes whole tables of numeric rows at
//! `<folder>/<file_name>.csv`. Files have no header row. Writing goes through
//! an explicit session: [`TabularStore::open_write_session`] truncates the
//! file, [`TabularStore::write_row`] appends rows, and
//! [`TabularStore::close_write_session`] flushes and releases the handle.
//!
//! # Row Width
//!
//! Rows of any non-zero width can be written. When parsing as integers, the
//! width of row 0 is the expected width of every row. Any row with a
//! different width is reported as [`FrameMetricsError::RowWidthMismatch`].

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{FrameMetricsError, Result};
use crate::metrics::MetricRecord;

/// Location of a table on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// Folder holding the table.
    pub folder: PathBuf,
    /// File name without the `.csv` extension.
    pub file_name: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("output"),
            file_name: "boundingBoxes".to_string(),
        }
    }
}

impl TableConfig {
    /// Full path of the table file.
    pub fn path(&self) -> PathBuf {
        self.folder.join(format!("{}.csv", self.file_name))
    }
}

struct WriteSession {
    path: PathBuf,
    writer: csv::Writer<BufWriter<File>>,
}

/// Reads and writes integer tables for one configured file.
///
/// At most one write session is open at a time.
pub struct TabularStore {
    config: TableConfig,
    session: Option<WriteSession>,
}

impl TabularStore {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn folder(&self) -> &Path {
        &self.config.folder
    }

    pub fn file_name(&self) -> &str {
        &self.config.file_name
    }

    /// Changes the table folder. Takes effect for the next read or session.
    pub fn set_folder(&mut self, folder: impl Into<PathBuf>) {
        self.config.folder = folder.into();
    }

    /// Changes the table file name. Takes effect for the next read or session.
    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.config.file_name = file_name.into();
    }

    /// Full path of the configured table file.
    pub fn path(&self) -> PathBuf {
        self.config.path()
    }

    /// Returns true while a write session is open.
    pub fn is_session_open(&self) -> bool {
        self.session.is_some()
    }

    /// Reads the table as rows of text fields.
    ///
    /// # Errors
    /// Returns [`FrameMetricsError::FileNotFound`] if the file does not exist,
    /// or an IO/CSV error if it cannot be read.
    pub fn read_rows(&self) -> Result<Vec<Vec<String>>> {
        let path = self.path();
        let reader = open_table(&path)?;
        rows_from_reader(reader, &path)
    }

    /// Reads the table and parses every field as an integer.
    ///
    /// An empty file yields an empty table.
    ///
    /// # Errors
    /// In addition to the errors of [`TabularStore::read_rows`], returns
    /// [`FrameMetricsError::FieldParse`] for a non-integer field and
    /// [`FrameMetricsError::RowWidthMismatch`] for a row whose width differs
    /// from row 0.
    pub fn read_rows_as_ints(&self) -> Result<Vec<Vec<i32>>> {
        let path = self.path();
        let rows = self.read_rows()?;
        parse_int_rows(&rows, &path)
    }

    /// Reads the table as metric records, one per row.
    pub fn read_records(&self) -> Result<Vec<MetricRecord>> {
        self.read_rows_as_ints()?
            .iter()
            .map(|row| MetricRecord::from_values(row))
            .collect()
    }

    /// Opens a write session, creating the folder if needed and truncating
    /// the file.
    ///
    /// # Errors
    /// Returns [`FrameMetricsError::SessionAlreadyOpen`] if a session is
    /// already open.
    pub fn open_write_session(&mut self) -> Result<()> {
        if let Some(session) = &self.session {
            return Err(FrameMetricsError::SessionAlreadyOpen {
                path: session.path.clone(),
            });
        }

        let path = self.path();
        fs::create_dir_all(&self.config.folder).map_err(FrameMetricsError::Io)?;
        let file = File::create(&path).map_err(FrameMetricsError::Io)?;
        // Flexible so a ragged row is written whole; widths are checked on read.
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(BufWriter::new(file));

        log::debug!("opened write session for {}", path.display());
        self.session = Some(WriteSession { path, writer });
        Ok(())
    }

    /// Appends one row to the open session.
    ///
    /// # Errors
    /// Returns [`FrameMetricsError::NoOpenSession`] if no session is open,
    /// or [`FrameMetricsError::EmptyRow`] if `fields` is empty (nothing is
    /// written in that case).
    pub fn write_row(&mut self, fields: &[i32]) -> Result<()> {
        let session = self
            .session
            .as_mut()
            .ok_or(FrameMetricsError::NoOpenSession)?;

        if fields.is_empty() {
            return Err(FrameMetricsError::EmptyRow {
                path: session.path.clone(),
            });
        }

        session
            .writer
            .write_record(fields.iter().map(|v| v.to_string()))
            .map_err(|source| FrameMetricsError::CsvWrite {
                path: session.path.clone(),
                source,
            })
    }

    /// Flushes and closes the open session.
    ///
    /// The session is released even when flushing fails.
    ///
    /// # Errors
    /// Returns [`FrameMetricsError::NoOpenSession`] if no session is open.
    pub fn close_write_session(&mut self) -> Result<()> {
        let WriteSession { path, writer } =
            self.session.take().ok_or(FrameMetricsError::NoOpenSession)?;

        writer
            .into_inner()
            .map_err(|e| FrameMetricsError::Io(e.into_error()))?
            .flush()
            .map_err(FrameMetricsError::Io)?;

        log::debug!("closed write session for {}", path.display());
        Ok(())
    }

    /// Writes `records` as the whole table in one session.
    pub fn write_records(&mut self, records: &[MetricRecord]) -> Result<()> {
        self.open_write_session()?;
        for record in records {
            if let Err(e) = self.write_row(&record.to_fields()) {
                if let Err(close_err) = self.close_write_session() {
                    log::warn!(
                        "failed to close {} after write error: {}",
                        self.path().display(),
                        close_err
                    );
                }
                return Err(e);
            }
        }
        self.close_write_session()
    }
}

impl Default for TabularStore {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

/// Parses CSV text into rows of text fields.
///
/// Useful for testing without file I/O.
pub fn rows_from_str(csv_str: &str) -> Result<Vec<Vec<String>>> {
    rows_from_reader(csv_str.as_bytes(), Path::new("<string>"))
}

/// Parses CSV text into integer rows, with the same width rule as
/// [`TabularStore::read_rows_as_ints`].
pub fn int_rows_from_str(csv_str: &str) -> Result<Vec<Vec<i32>>> {
    int_rows_from_slice(csv_str.as_bytes())
}

/// Parses CSV bytes into integer rows.
///
/// Useful for fuzzing and processing raw bytes without requiring UTF-8 upfront.
pub fn int_rows_from_slice(bytes: &[u8]) -> Result<Vec<Vec<i32>>> {
    let path = Path::new("<bytes>");
    let rows = rows_from_reader(bytes, path)?;
    parse_int_rows(&rows, path)
}

fn open_table(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FrameMetricsError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(FrameMetricsError::Io(e)),
    }
}

fn rows_from_reader<R: Read>(reader: R, path: &Path) -> Result<Vec<Vec<String>>> {
    // Flexible so that width mismatches surface as RowWidthMismatch below.
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|source| FrameMetricsError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    log::debug!("read {} row(s) from {}", rows.len(), path.display());
    Ok(rows)
}

fn parse_int_rows(rows: &[Vec<String>], path: &Path) -> Result<Vec<Vec<i32>>> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };
    let width = first.len();

    rows.iter()
        .enumerate()
        .map(|(row_idx, row)| {
            if row.len() != width {
                return Err(FrameMetricsError::RowWidthMismatch {
                    path: path.to_path_buf(),
                    row: row_idx,
                    expected: width,
                    found: row.len(),
                });
            }

            row.iter()
                .enumerate()
                .map(|(col_idx, field)| {
                    field
                        .trim()
                        .parse::<i32>()
                        .map_err(|source| FrameMetricsError::FieldParse {
                            path: path.to_path_buf(),
                            row: row_idx,
                            column: col_idx,
                            value: field.clone(),
                            source,
                        })
                })
                .collect::<Result<Vec<i32>>>()
        })
        .collect()
}
