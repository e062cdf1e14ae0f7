// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the menu bar, dialogs and image area.

pub mod button;
pub mod container;
