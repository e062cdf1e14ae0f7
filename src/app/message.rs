// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::ui::{dialogs, menu_bar};
use iced::{window, Event};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    MenuBar(menu_bar::Message),
    Dialog(dialogs::Message),
    /// Native event not captured by any widget.
    RawEvent {
        window: window::Id,
        event: Event,
    },
    /// Slideshow timer fired.
    Tick(Instant),
    /// Result of the folder picker; `None` when it was cancelled.
    FolderPicked(Option<PathBuf>),
    /// Left click on the image area.
    ImageAreaPressed,
    /// Wheel motion over the image area.
    ImageWheel(f32),
}
