// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one renders from borrowed state and reports what happened through its own
//! `Message`/`Event` pair.
//!
//! - [`menu_bar`] - File, Language, Settings, View and Help menus
//! - [`viewer`] - Image area with zoom and panning
//! - [`dialogs`] - Modal notices and the custom interval prompt
//! - [`state`] - Zoom state
//! - [`widgets`] - Custom Iced widgets
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod dialogs;
pub mod menu_bar;
pub mod state;
pub mod styles;
pub mod viewer;
pub mod widgets;
