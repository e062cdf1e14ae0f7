// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Slideshow**: Interval presets and bounds
//! - **Custom interval prompt**: Bounds of the numeric input, in seconds
//! - **Zoom**: Zoom factor bounds and step
//! - **Window**: Default and minimum window size
//! - **Input**: Pointer thresholds

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Interval used when nothing else is configured (3 seconds).
pub const DEFAULT_INTERVAL_MS: u64 = 3000;

/// Shortest interval the slideshow timer accepts.
pub const MIN_INTERVAL_MS: u64 = 100;

/// Intervals offered in the Settings menu, in display order.
pub const INTERVAL_PRESETS_MS: [u64; 5] = [1000, 2000, 3000, 5000, 10000];

// ==========================================================================
// Custom Interval Prompt
// ==========================================================================

/// Smallest value accepted by the custom interval prompt.
pub const CUSTOM_INTERVAL_MIN_SECS: f64 = 0.1;

/// Largest value accepted by the custom interval prompt (one hour).
pub const CUSTOM_INTERVAL_MAX_SECS: f64 = 3600.0;

/// Granularity of the custom interval prompt.
pub const CUSTOM_INTERVAL_STEP_SECS: f64 = 0.1;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor of fit and actual-size presentation.
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Minimum custom zoom factor.
pub const MIN_ZOOM_FACTOR: f32 = 0.1;

/// Maximum custom zoom factor.
pub const MAX_ZOOM_FACTOR: f32 = 10.0;

/// Multiplier applied per zoom-in step (divisor per zoom-out step).
pub const ZOOM_STEP_FACTOR: f32 = 1.2;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

// ==========================================================================
// Input
// ==========================================================================

/// Two left clicks closer than this count as a double click.
pub const DOUBLE_CLICK_THRESHOLD_MS: u64 = 350;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_INTERVAL_MS > 0);
    assert!(DEFAULT_INTERVAL_MS >= MIN_INTERVAL_MS);

    let mut i = 0;
    while i < INTERVAL_PRESETS_MS.len() {
        assert!(INTERVAL_PRESETS_MS[i] >= MIN_INTERVAL_MS);
        i += 1;
    }

    assert!(CUSTOM_INTERVAL_MIN_SECS > 0.0);
    assert!(CUSTOM_INTERVAL_MAX_SECS > CUSTOM_INTERVAL_MIN_SECS);

    assert!(MIN_ZOOM_FACTOR > 0.0);
    assert!(MIN_ZOOM_FACTOR < DEFAULT_ZOOM_FACTOR);
    assert!(MAX_ZOOM_FACTOR > DEFAULT_ZOOM_FACTOR);
    assert!(ZOOM_STEP_FACTOR > 1.0);

    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
