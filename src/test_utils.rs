// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and image fixtures.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use image_rs::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a small solid-color image; the extension picks the encoder.
pub fn write_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([120, 80, 200]))
        .save(&path)
        .expect("failed to write fixture image");
    path
}

/// Writes a file with a supported extension but undecodable content.
pub fn write_corrupt(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"definitely not an image").expect("failed to write corrupt fixture");
    path
}
