// SPDX-License-Identifier: MPL-2.0
// Prevent a console window next to the app window in Windows release builds.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    beginview::app::run()
}
