// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles the zoom mode (fit, actual size or custom factor) and
//! computes the size at which the decoded image is presented.

pub use crate::config::{DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, ZOOM_STEP_FACTOR};
use iced::Size;

/// Zoom multiplier, guaranteed to be within valid range (0.1–10.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_FACTOR
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_FACTOR
    }

    /// Multiplies by one zoom step.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 * ZOOM_STEP_FACTOR)
    }

    /// Divides by one zoom step.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 / ZOOM_STEP_FACTOR)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

/// How the decoded image is mapped onto the display area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// Scaled to fit the display area, preserving aspect ratio.
    #[default]
    Fit,
    /// One image pixel per screen pixel.
    ActualSize,
    /// Original size times the current factor.
    Custom,
}

/// Manages all zoom-related state for the image area
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomState {
    pub mode: ZoomMode,
    pub factor: ZoomFactor,
}

impl ZoomState {
    /// Switches to fit mode and resets the factor.
    pub fn fit(&mut self) {
        self.mode = ZoomMode::Fit;
        self.factor = ZoomFactor::default();
    }

    /// Switches to actual-size mode and resets the factor.
    pub fn actual_size(&mut self) {
        self.mode = ZoomMode::ActualSize;
        self.factor = ZoomFactor::default();
    }

    pub fn zoom_in(&mut self) {
        self.factor = self.factor.zoom_in();
        self.mode = ZoomMode::Custom;
    }

    pub fn zoom_out(&mut self) {
        self.factor = self.factor.zoom_out();
        self.mode = ZoomMode::Custom;
    }

    #[must_use]
    pub fn is_fit(&self) -> bool {
        self.mode == ZoomMode::Fit
    }

    /// Size at which an image of `image` pixels is drawn inside `area`.
    #[must_use]
    pub fn presented_size(&self, image: Size, area: Size) -> Size {
        match self.mode {
            ZoomMode::Fit => scaled(image, fit_scale(image, area)),
            ZoomMode::ActualSize => image,
            ZoomMode::Custom => scaled(image, self.factor.value()),
        }
    }
}

fn scaled(size: Size, scale: f32) -> Size {
    Size::new(size.width * scale, size.height * scale)
}

/// Scale that makes `image` as large as possible inside `area` without
/// cropping. Small images are scaled up as well.
#[must_use]
pub fn fit_scale(image: Size, area: Size) -> f32 {
    if image.width <= 0.0 || image.height <= 0.0 {
        return DEFAULT_ZOOM_FACTOR;
    }
    let scale = (area.width / image.width).min(area.height / image.height);
    scale.max(0.0)
}
