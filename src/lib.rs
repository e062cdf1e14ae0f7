// SPDX-License-Identifier: MPL-2.0
//! `beginview` is a simple image slideshow viewer built with the Iced GUI
//! framework.
//!
//! It opens a folder of JPEG and PNG images, plays them back on a timer and
//! offers zoom, fullscreen and keyboard/mouse navigation, with a Japanese and
//! English interface localized through Fluent.

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod media;
pub mod slideshow;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
