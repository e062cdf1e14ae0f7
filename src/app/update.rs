// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers borrow the pieces of `App` they need through [`UpdateContext`]
//! and translate slideshow outcomes into dialogs, log lines and tasks.

use super::Message;
use crate::config::DOUBLE_CLICK_THRESHOLD_MS;
use crate::i18n::fluent::I18n;
use crate::slideshow::{DisplayOutcome, FolderOutcome, Slideshow};
use crate::ui::dialogs::{self, Dialog, Event as DialogEvent};
use crate::ui::menu_bar::{self, Event as MenuBarEvent, MenuKind};
use crate::ui::widgets::wheel_zoom::wheel_delta;
use fluent_bundle::FluentArgs;
use iced::{event, keyboard, window, Task};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub slideshow: &'a mut Slideshow,
    pub dialog: &'a mut Option<Dialog>,
    pub open_menu: &'a mut Option<MenuKind>,
    pub fullscreen: &'a mut bool,
    pub window_id: &'a mut Option<window::Id>,
    pub last_click: &'a mut Option<Instant>,
    pub timer_epoch: &'a mut u64,
}

impl UpdateContext<'_> {
    fn restart_timer(&mut self) {
        *self.timer_epoch = self.timer_epoch.wrapping_add(1);
    }

    fn show(&mut self, dialog: Dialog) {
        *self.open_menu = None;
        *self.dialog = Some(dialog);
    }
}

/// Keyboard commands of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlay,
    Next,
    Previous,
    ToggleFullscreen,
    /// Leaves fullscreen, or resets the zoom when windowed.
    Escape,
    ZoomIn,
    ZoomOut,
    ActualSize,
    Fit,
    ShowInfo,
}

/// Maps a pressed key to its command.
#[must_use]
pub fn shortcut_for(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Shortcut> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::Space) => Some(Shortcut::TogglePlay),
        keyboard::Key::Named(Named::ArrowRight) => Some(Shortcut::Next),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Shortcut::Previous),
        keyboard::Key::Named(Named::F11) => Some(Shortcut::ToggleFullscreen),
        keyboard::Key::Named(Named::Escape) => Some(Shortcut::Escape),
        keyboard::Key::Character(c) if !modifiers.command() && !modifiers.alt() => {
            match c.as_str() {
                "+" | "=" => Some(Shortcut::ZoomIn),
                "-" => Some(Shortcut::ZoomOut),
                "0" => Some(Shortcut::ActualSize),
                "f" | "F" => Some(Shortcut::Fit),
                "i" | "I" => Some(Shortcut::ShowInfo),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Handles menu bar messages.
pub fn handle_menu_bar_message(
    ctx: &mut UpdateContext<'_>,
    message: menu_bar::Message,
) -> Task<Message> {
    match menu_bar::update(message, ctx.open_menu) {
        MenuBarEvent::None => Task::none(),
        MenuBarEvent::OpenFolder => handle_open_folder_dialog(ctx.i18n.tr("menu-open-folder")),
        MenuBarEvent::Exit => iced::exit(),
        MenuBarEvent::SelectLanguage(language) => {
            log::info!("switching language to {}", language.code());
            ctx.i18n.set_language(language);
            Task::none()
        }
        MenuBarEvent::SelectPresetInterval(millis) => {
            ctx.slideshow.set_preset_interval(millis);
            Task::none()
        }
        MenuBarEvent::OpenCustomInterval => {
            let prompt = Dialog::interval_prompt(ctx.i18n, ctx.slideshow.interval());
            ctx.show(prompt);
            Task::none()
        }
        MenuBarEvent::ToggleIncludeSubfolders => {
            let include = !ctx.slideshow.include_subfolders();
            ctx.slideshow.set_include_subfolders(include);
            Task::none()
        }
        MenuBarEvent::ZoomFit => {
            ctx.slideshow.zoom_fit();
            Task::none()
        }
        MenuBarEvent::ZoomActualSize => {
            ctx.slideshow.zoom_actual_size();
            Task::none()
        }
        MenuBarEvent::ZoomIn => {
            ctx.slideshow.zoom_in();
            Task::none()
        }
        MenuBarEvent::ZoomOut => {
            ctx.slideshow.zoom_out();
            Task::none()
        }
        MenuBarEvent::ShowInfo => {
            show_info(ctx);
            Task::none()
        }
        MenuBarEvent::ShowAbout => {
            let about = Dialog::about(ctx.i18n);
            ctx.show(about);
            Task::none()
        }
    }
}

/// Handles dialog messages.
pub fn handle_dialog_message(ctx: &mut UpdateContext<'_>, message: dialogs::Message) -> Task<Message> {
    match dialogs::update(message, ctx.dialog) {
        DialogEvent::None | DialogEvent::Closed => {}
        DialogEvent::IntervalEntered(input) => match ctx.slideshow.set_custom_interval(&input) {
            Ok(interval) => log::info!("custom interval set to {} ms", interval.as_millis()),
            Err(err) => {
                log::warn!("rejected custom interval {input:?}: {err}");
                let notice = Dialog::invalid_interval(ctx.i18n);
                ctx.show(notice);
            }
        },
    }
    Task::none()
}

/// Handles native events forwarded by the event subscription.
pub fn handle_raw_event(
    ctx: &mut UpdateContext<'_>,
    window: window::Id,
    event: &event::Event,
) -> Task<Message> {
    *ctx.window_id = Some(window);

    if ctx.dialog.is_some() {
        if matches!(*ctx.dialog, Some(Dialog::Notice { .. })) && dismisses_notice(event) {
            return handle_dialog_message(ctx, dialogs::Message::Dismiss);
        }
        return Task::none();
    }

    if let Some(delta) = wheel_delta(event) {
        return handle_wheel(ctx, delta);
    }

    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match shortcut_for(key, *modifiers) {
                Some(shortcut) => handle_shortcut(ctx, shortcut),
                None => Task::none(),
            }
        }
        _ => Task::none(),
    }
}

/// Runs a keyboard command.
pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    match shortcut {
        Shortcut::TogglePlay => {
            toggle_play(ctx);
            Task::none()
        }
        Shortcut::Next => {
            let outcome = ctx.slideshow.next();
            report_display(ctx, outcome);
            Task::none()
        }
        Shortcut::Previous => {
            let outcome = ctx.slideshow.previous();
            report_display(ctx, outcome);
            Task::none()
        }
        Shortcut::ToggleFullscreen => {
            let desired = !*ctx.fullscreen;
            update_fullscreen_mode(ctx.fullscreen, *ctx.window_id, desired)
        }
        Shortcut::Escape => {
            if ctx.open_menu.take().is_some() {
                Task::none()
            } else if *ctx.fullscreen {
                update_fullscreen_mode(ctx.fullscreen, *ctx.window_id, false)
            } else {
                ctx.slideshow.reset_zoom();
                Task::none()
            }
        }
        Shortcut::ZoomIn => {
            ctx.slideshow.zoom_in();
            Task::none()
        }
        Shortcut::ZoomOut => {
            ctx.slideshow.zoom_out();
            Task::none()
        }
        Shortcut::ActualSize => {
            ctx.slideshow.zoom_actual_size();
            Task::none()
        }
        Shortcut::Fit => {
            ctx.slideshow.zoom_fit();
            Task::none()
        }
        Shortcut::ShowInfo => {
            show_info(ctx);
            Task::none()
        }
    }
}

/// Wheel motion anywhere in the window.
pub fn handle_wheel(ctx: &mut UpdateContext<'_>, delta: f32) -> Task<Message> {
    if ctx.dialog.is_none() && delta != 0.0 {
        ctx.slideshow.zoom_by_wheel(delta);
    }
    Task::none()
}

/// Timer expiry.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.slideshow.timer_active() {
        let outcome = ctx.slideshow.tick();
        report_display(ctx, outcome);
    }
    Task::none()
}

/// Click on the image area. Every first click toggles playback; a second
/// click within the double-click window also toggles fullscreen.
pub fn handle_image_area_pressed(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if ctx.open_menu.take().is_some() {
        return Task::none();
    }

    let threshold = Duration::from_millis(DOUBLE_CLICK_THRESHOLD_MS);
    let is_double = ctx
        .last_click
        .is_some_and(|previous| now.saturating_duration_since(previous) <= threshold);

    if is_double {
        *ctx.last_click = None;
        let desired = !*ctx.fullscreen;
        update_fullscreen_mode(ctx.fullscreen, *ctx.window_id, desired)
    } else {
        *ctx.last_click = Some(now);
        toggle_play(ctx);
        Task::none()
    }
}

/// Result of the folder picker.
pub fn handle_folder_picked(ctx: &mut UpdateContext<'_>, folder: Option<PathBuf>) -> Task<Message> {
    let Some(folder) = folder else {
        return Task::none();
    };

    match ctx.slideshow.open_folder(&folder) {
        FolderOutcome::Opened { display, .. } => {
            ctx.restart_timer();
            report_display(ctx, display);
        }
        FolderOutcome::Empty => {
            let notice = Dialog::no_images(ctx.i18n);
            ctx.show(notice);
        }
        FolderOutcome::ScanFailed(err) => {
            log::error!("cannot scan {}: {err}", folder.display());
            let notice = Dialog::scan_failed(ctx.i18n, &err.to_string());
            ctx.show(notice);
        }
    }
    Task::none()
}

/// Opens the native folder picker.
pub fn handle_open_folder_dialog(title: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .pick_folder()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::FolderPicked,
    )
}

fn dismisses_notice(event: &event::Event) -> bool {
    use keyboard::key::Named;

    matches!(
        event,
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(Named::Enter | Named::Escape),
            ..
        })
    )
}

fn toggle_play(ctx: &mut UpdateContext<'_>) {
    ctx.slideshow.toggle_play();
    if ctx.slideshow.is_playing() {
        ctx.restart_timer();
    }
}

fn show_info(ctx: &mut UpdateContext<'_>) {
    if let Some(info) = ctx.slideshow.info() {
        let dialog = Dialog::image_info(ctx.i18n, &info);
        ctx.show(dialog);
    }
}

/// Logs skipped files and raises the terminal notice when nothing could be
/// shown.
fn report_display(ctx: &mut UpdateContext<'_>, outcome: DisplayOutcome) {
    let failures = match outcome {
        DisplayOutcome::Shown { skipped, .. } => skipped,
        DisplayOutcome::NothingViewable { failures } => failures,
        DisplayOutcome::Ignored => return,
    };

    for failure in &failures {
        let mut args = FluentArgs::new();
        args.set("filename", failure.path.display().to_string());
        log::warn!(
            "{} ({})",
            ctx.i18n.tr_with_args("msg-error-loading-body", &args),
            failure.error
        );
    }

    if ctx.slideshow.image().is_none() && !failures.is_empty() {
        log::error!(
            "none of the {} image(s) in the sequence could be decoded",
            ctx.slideshow.len()
        );
        let notice = Dialog::no_viewable_images(ctx.i18n);
        ctx.show(notice);
    }
}

fn update_fullscreen_mode(
    fullscreen: &mut bool,
    window_id: Option<window::Id>,
    desired: bool,
) -> Task<Message> {
    if *fullscreen == desired {
        return Task::none();
    }

    let Some(window_id) = window_id else {
        return Task::none();
    };

    *fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(window_id, mode)
}
