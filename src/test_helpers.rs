//! Shared test utilities.
//!
//! Synthetic image fixtures and decode helpers so tests never depend on
//! binary files checked into the repo.

use image::{Rgba, RgbaImage};
use std::path::Path;

/// Write a PNG with a gradient and an alpha edge, so resizes have real work to do.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let alpha = if x == 0 || y == 0 { 0 } else { 255 };
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, alpha])
    });
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Decode a file and return its `(width, height)`. Panics with the path on failure.
pub fn decoded_dimensions(path: &Path) -> (u32, u32) {
    let img = image::ImageReader::open(path)
        .unwrap_or_else(|e| panic!("cannot open {}: {e}", path.display()))
        .with_guessed_format()
        .unwrap()
        .decode()
        .unwrap_or_else(|e| panic!("cannot decode {}: {e}", path.display()));
    (img.width(), img.height())
}
