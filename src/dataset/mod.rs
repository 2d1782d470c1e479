//! Image dataset selection.
//!
//! [`DatasetSelector`] enumerates files in a configured input folder whose
//! names start with a prefix, then loads a strided (and optionally
//! truncated) subset of them. Decoded images can be written back to a
//! configured output folder as PNG.
//!
//! # Selection Pipeline
//!
//! Each selection lists the input folder exactly once and then applies, in
//! order:
//!
//! 1. **filter**: keep regular files whose name starts with the prefix
//!    (no prefix keeps every file)
//! 2. **truncate**: keep the first `limit` names (`0` keeps all)
//! 3. **stride**: keep positions `0, stride, 2 * stride, ...`
//!
//! Listing order is whatever the filesystem reports; it is not sorted.
//!
//! # Example
//!
//! ```no_run
//! use framemetrics::dataset::{DatasetSelector, SelectorConfig};
//!
//! let selector = DatasetSelector::new(SelectorConfig::default());
//! let frames = selector.load_matching(Some("frame_"), 5)?;
//! for frame in &frames {
//!     println!("{}: {}x{}", frame.name, frame.image.width(), frame.image.height());
//! }
//! # Ok::<(), framemetrics::FrameMetricsError>(())
//! ```

mod selection;

pub use selection::select_positions;

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageReader};
use walkdir::WalkDir;

use crate::error::{FrameMetricsError, Result};

/// Folders and output naming used by a [`DatasetSelector`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Folder images are listed and loaded from.
    pub input_folder: PathBuf,
    /// Folder saved images are written to. Created on first save.
    pub output_folder: PathBuf,
    /// Extension given to saved files. The encoding is always PNG.
    pub file_format: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::from("input"),
            output_folder: PathBuf::from("output"),
            file_format: "png".to_string(),
        }
    }
}

/// A decoded image together with the file name it was loaded from.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub name: String,
    pub image: DynamicImage,
}

/// Lists, loads and saves images for one configured set of folders.
#[derive(Clone, Debug, Default)]
pub struct DatasetSelector {
    config: SelectorConfig,
}

impl DatasetSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn input_folder(&self) -> &Path {
        &self.config.input_folder
    }

    pub fn output_folder(&self) -> &Path {
        &self.config.output_folder
    }

    pub fn file_format(&self) -> &str {
        &self.config.file_format
    }

    pub fn set_input_folder(&mut self, folder: impl Into<PathBuf>) {
        self.config.input_folder = folder.into();
        log::info!(
            "input folder changed to {}",
            self.config.input_folder.display()
        );
    }

    pub fn set_output_folder(&mut self, folder: impl Into<PathBuf>) {
        self.config.output_folder = folder.into();
        log::info!(
            "output folder changed to {}",
            self.config.output_folder.display()
        );
    }

    pub fn set_file_format(&mut self, file_format: impl Into<String>) {
        self.config.file_format = file_format.into();
    }

    /// Counts files in the input folder whose name starts with `prefix`.
    ///
    /// `None` counts every file. Only regular files are counted:
    /// subdirectories are skipped even though they are folder entries.
    ///
    /// # Errors
    /// Returns [`FrameMetricsError::FolderNotFound`] if the input folder does
    /// not exist, or [`FrameMetricsError::ListFolder`] if it cannot be listed.
    pub fn count_matching(&self, prefix: Option<&str>) -> Result<usize> {
        Ok(self.names_matching(prefix)?.len())
    }

    /// Names of regular files in the input folder whose name starts with
    /// `prefix`, in listing order. Subdirectories are skipped and nothing is
    /// decoded.
    pub fn names_matching(&self, prefix: Option<&str>) -> Result<Vec<String>> {
        let folder = &self.config.input_folder;
        ensure_folder(folder)?;

        let mut names = Vec::new();
        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry.map_err(|source| FrameMetricsError::ListFolder {
                path: folder.clone(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                log::warn!("skipping non UTF-8 file name {}", entry.path().display());
                continue;
            };

            if prefix.is_none_or(|p| name.starts_with(p)) {
                names.push(name.to_string());
            }
        }

        log::debug!(
            "{} file(s) in {} match prefix {:?}",
            names.len(),
            folder.display(),
            prefix
        );
        Ok(names)
    }

    /// Names a strided, limited load would visit, from a single listing.
    ///
    /// See the module docs for the filter, truncate and stride order.
    /// `limit == 0` (or a limit beyond the number of matches) keeps all
    /// matches.
    ///
    /// # Errors
    /// Returns [`FrameMetricsError::InvalidStride`] if `stride` is 0, plus
    /// the listing errors of [`DatasetSelector::names_matching`].
    pub fn select_names(
        &self,
        prefix: Option<&str>,
        stride: usize,
        limit: usize,
    ) -> Result<Vec<String>> {
        // Validate before touching the filesystem.
        select_positions(0, stride, limit)?;

        let names = self.names_matching(prefix)?;
        let positions = select_positions(names.len(), stride, limit)?;
        Ok(positions.into_iter().map(|i| names[i].clone()).collect())
    }

    /// Loads every `stride`-th matching file, starting with the first.
    ///
    /// # Errors
    /// Fails on the first file that cannot be loaded; see
    /// [`DatasetSelector::load`].
    pub fn load_matching(
        &self,
        prefix: Option<&str>,
        stride: usize,
    ) -> Result<Vec<LoadedImage>> {
        self.load_matching_limited(prefix, stride, 0)
    }

    /// Loads every `stride`-th file among the first `limit` matches.
    pub fn load_matching_limited(
        &self,
        prefix: Option<&str>,
        stride: usize,
        limit: usize,
    ) -> Result<Vec<LoadedImage>> {
        let names = self.select_names(prefix, stride, limit)?;
        log::debug!(
            "loading {} image(s) from {} (stride {}, limit {})",
            names.len(),
            self.config.input_folder.display(),
            stride,
            limit
        );

        names
            .into_iter()
            .map(|name| {
                let image = self.load(&name)?;
                Ok(LoadedImage { name, image })
            })
            .collect()
    }

    /// Loads and decodes a single file from the input folder.
    ///
    /// The encoding is detected from the file contents, not its extension.
    ///
    /// # Errors
    /// - [`FrameMetricsError::FolderNotFound`] if the input folder is missing
    /// - [`FrameMetricsError::FileNotFound`] if the file is missing
    /// - [`FrameMetricsError::ImageDecode`] if the file is not a decodable image
    pub fn load(&self, name: &str) -> Result<DynamicImage> {
        ensure_folder(&self.config.input_folder)?;

        let path = self.config.input_folder.join(name);
        if !path.is_file() {
            return Err(FrameMetricsError::FileNotFound { path });
        }

        let reader = ImageReader::open(&path)
            .map_err(FrameMetricsError::Io)?
            .with_guessed_format()
            .map_err(FrameMetricsError::Io)?;

        reader
            .decode()
            .map_err(|source| FrameMetricsError::ImageDecode { path, source })
    }

    /// Saves `image` as `<output_folder>/<name>.<file_format>`, creating the
    /// output folder if needed. Returns the written path.
    ///
    /// The bytes are always PNG; `file_format` only sets the extension.
    pub fn save(&self, image: &DynamicImage, name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.config.output_folder).map_err(FrameMetricsError::Io)?;

        let path = self
            .config
            .output_folder
            .join(format!("{}.{}", name, self.config.file_format));

        image
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| FrameMetricsError::ImageEncode {
                path: path.clone(),
                source,
            })?;

        log::info!("saved {}", path.display());
        Ok(path)
    }
}

fn ensure_folder(folder: &Path) -> Result<()> {
    if folder.is_dir() {
        Ok(())
    } else {
        Err(FrameMetricsError::FolderNotFound {
            path: folder.to_path_buf(),
        })
    }
}
