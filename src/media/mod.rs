// SPDX-License-Identifier: MPL-2.0
//! Media decoding.

pub mod image;

pub use image::{load_image, ImageData};
