// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State that shapes how the image area is drawn, kept apart from the
//! application struct so it can be tested without a window.

pub mod zoom;

pub use zoom::{ZoomFactor, ZoomMode, ZoomState};
