// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the menu bar, the image
//! area and the slideshow controller.
//!
//! The `App` struct owns the [`Slideshow`], the active language and the
//! window state, and translates messages into controller calls, dialogs and
//! window tasks.

mod message;
mod subscription;
mod update;
mod view;

pub use message::Message;
pub use update::{shortcut_for, Shortcut};

use crate::config::{
    self, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::i18n::fluent::I18n;
use crate::slideshow::Slideshow;
use crate::ui::dialogs::Dialog;
use crate::ui::menu_bar::MenuKind;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
#[derive(Default)]
pub struct App {
    pub i18n: I18n,
    slideshow: Slideshow,
    fullscreen: bool,
    window_id: Option<window::Id>,
    open_menu: Option<MenuKind>,
    dialog: Option<Dialog>,
    /// Time of the last single click on the image area.
    last_click: Option<Instant>,
    /// Bumped whenever the slide timer must start counting from zero.
    timer_epoch: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.i18n.language())
            .field("images", &self.slideshow.len())
            .field("index", &self.slideshow.current_index())
            .field("playing", &self.slideshow.is_playing())
            .field("fullscreen", &self.fullscreen)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Reads the startup configuration and builds an idle slideshow.
    fn new() -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }

        let app = App {
            i18n: I18n::new(config.general.language.as_deref()),
            slideshow: Slideshow::new(&config.slideshow),
            ..Self::default()
        };
        log::info!(
            "starting in {} with a {} ms interval",
            app.i18n.language().code(),
            app.slideshow.interval().as_millis()
        );

        (app, Task::none())
    }

    /// `"<file> - <app>"` while an image is current, the bare app name
    /// otherwise.
    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        let file_name = self
            .slideshow
            .image()
            .and(self.slideshow.current_path())
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy());

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let period = self
            .slideshow
            .timer_active()
            .then(|| self.slideshow.interval().as_duration());

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(period, self.timer_epoch),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            slideshow: &mut self.slideshow,
            dialog: &mut self.dialog,
            open_menu: &mut self.open_menu,
            fullscreen: &mut self.fullscreen,
            window_id: &mut self.window_id,
            last_click: &mut self.last_click,
            timer_epoch: &mut self.timer_epoch,
        };

        match message {
            Message::MenuBar(message) => update::handle_menu_bar_message(&mut ctx, message),
            Message::Dialog(message) => update::handle_dialog_message(&mut ctx, message),
            Message::RawEvent { window, event } => {
                update::handle_raw_event(&mut ctx, window, &event)
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
            Message::FolderPicked(folder) => update::handle_folder_picked(&mut ctx, folder),
            Message::ImageAreaPressed => {
                update::handle_image_area_pressed(&mut ctx, Instant::now())
            }
            Message::ImageWheel(delta) => update::handle_wheel(&mut ctx, delta),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            slideshow: &self.slideshow,
            open_menu: self.open_menu,
            dialog: self.dialog.as_ref(),
            fullscreen: self.fullscreen,
        })
    }
}
