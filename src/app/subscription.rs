// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Forwards native events that no widget captured.
///
/// Wheel motion over the image area is captured there and arrives as
/// [`Message::ImageWheel`]; over the rest of the window it comes through
/// here so the wheel zooms anywhere.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match status {
        event::Status::Ignored => Some(Message::RawEvent {
            window: window_id,
            event,
        }),
        event::Status::Captured => None,
    })
}

/// Slideshow timer. Runs only while `period` is set.
///
/// A new `epoch` restarts the countdown even when the period is unchanged.
pub fn create_tick_subscription(period: Option<Duration>, epoch: u64) -> Subscription<Message> {
    match period {
        Some(period) => time::every(period)
            .with(epoch)
            .map(|(_, instant)| Message::Tick(instant)),
        None => Subscription::none(),
    }
}
