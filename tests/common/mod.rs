#![allow(dead_code)]

use std::fs;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Writes a solid-colour PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    let img = RgbImage::from_pixel(width, height, Rgb([200, 40, 90]));
    img.save_with_format(path, ImageFormat::Png)
        .expect("write png file");
}

/// Writes bytes that no image decoder will accept.
pub fn write_corrupt(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, b"definitely not an image").expect("write corrupt file");
}

/// File names in `dir` in raw directory-listing order.
pub fn listing_order(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry"))
        .filter(|entry| entry.file_type().expect("file type").is_file())
        .map(|entry| entry.file_name().into_string().expect("utf-8 name"))
        .collect()
}
