//! Framemetrics: strided image dataset selection and per-frame metric tables.
//!
//! A run selects a filtered, strided subset of images from an input folder,
//! pairs each frame with a [`MetricRecord`](metrics::MetricRecord) (a
//! bounding box plus relative motion metrics), persists the records as a CSV
//! table, and summarizes record columns with simple statistics.
//!
//! # Modules
//!
//! - [`dataset`]: Listing, strided loading and saving of images
//! - [`metrics`]: The per-frame metric record
//! - [`table`]: CSV persistence of integer rows and metric records
//! - [`stats`]: Mean, median, mode and standard deviation
//! - [`naming`]: Zero-padded frame file names
//! - [`error`]: Error types for framemetrics operations
//!
//! # Example
//!
//! ```no_run
//! use framemetrics::dataset::{DatasetSelector, SelectorConfig};
//! use framemetrics::metrics::{MetricField, MetricRecord};
//! use framemetrics::stats;
//! use framemetrics::table::{TableConfig, TabularStore};
//!
//! let selector = DatasetSelector::new(SelectorConfig::default());
//! let frames = selector.load_matching(Some("frame_"), 2)?;
//!
//! let records: Vec<MetricRecord> = frames
//!     .iter()
//!     .map(|f| MetricRecord::new(0, 0, f.image.width() as i32, f.image.height() as i32))
//!     .collect();
//!
//! let mut store = TabularStore::new(TableConfig::default());
//! store.write_records(&records)?;
//!
//! let stored = store.read_records()?;
//! println!("{}", stats::summarize_field(&stored, MetricField::AbsEndX)?);
//! # Ok::<(), framemetrics::FrameMetricsError>(())
//! ```

pub mod dataset;
pub mod error;
pub mod metrics;
pub mod naming;
pub mod stats;
pub mod table;

pub use error::{FrameMetricsError, Result};
