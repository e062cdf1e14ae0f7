// SPDX-License-Identifier: MPL-2.0
//! Menu bar module for the main window.
//!
//! This module provides the File, Language, Settings, View and Help menus.
//! At most one dropdown is open at a time and choosing an entry closes it.
//! Every label is read from the catalog on each render, so switching the
//! language relabels the whole bar.

use crate::config::INTERVAL_PRESETS_MS;
use crate::i18n::fluent::{I18n, Language};
use crate::slideshow::Interval;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, rule, Column, Container, Row, Text},
    Element, Length, Padding,
};

/// Menus of the menu bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    File,
    Language,
    Settings,
    View,
    Help,
}

impl MenuKind {
    pub const ALL: [MenuKind; 5] = [
        MenuKind::File,
        MenuKind::Language,
        MenuKind::Settings,
        MenuKind::View,
        MenuKind::Help,
    ];

    fn title_key(self) -> &'static str {
        match self {
            MenuKind::File => "menu-file",
            MenuKind::Language => "menu-language",
            MenuKind::Settings => "menu-settings",
            MenuKind::View => "menu-view",
            MenuKind::Help => "menu-help",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|kind| *kind == self).unwrap_or(0)
    }
}

/// Contextual data needed to render the menu bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub open_menu: Option<MenuKind>,
    pub interval: Interval,
    pub include_subfolders: bool,
}

/// Messages emitted by the menu bar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu(MenuKind),
    CloseMenu,
    OpenFolder,
    Exit,
    SelectLanguage(Language),
    SelectPresetInterval(u64),
    OpenCustomInterval,
    ToggleIncludeSubfolders,
    ZoomFit,
    ZoomActualSize,
    ZoomIn,
    ZoomOut,
    ShowInfo,
    ShowAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    OpenFolder,
    Exit,
    SelectLanguage(Language),
    SelectPresetInterval(u64),
    OpenCustomInterval,
    ToggleIncludeSubfolders,
    ZoomFit,
    ZoomActualSize,
    ZoomIn,
    ZoomOut,
    ShowInfo,
    ShowAbout,
}

/// Process a menu bar message and return the corresponding event.
pub fn update(message: Message, open_menu: &mut Option<MenuKind>) -> Event {
    let event = match message {
        Message::ToggleMenu(kind) => {
            *open_menu = if *open_menu == Some(kind) {
                None
            } else {
                Some(kind)
            };
            return Event::None;
        }
        Message::CloseMenu => Event::None,
        Message::OpenFolder => Event::OpenFolder,
        Message::Exit => Event::Exit,
        Message::SelectLanguage(language) => Event::SelectLanguage(language),
        Message::SelectPresetInterval(millis) => Event::SelectPresetInterval(millis),
        Message::OpenCustomInterval => Event::OpenCustomInterval,
        Message::ToggleIncludeSubfolders => Event::ToggleIncludeSubfolders,
        Message::ZoomFit => Event::ZoomFit,
        Message::ZoomActualSize => Event::ZoomActualSize,
        Message::ZoomIn => Event::ZoomIn,
        Message::ZoomOut => Event::ZoomOut,
        Message::ShowInfo => Event::ShowInfo,
        Message::ShowAbout => Event::ShowAbout,
    };
    *open_menu = None;
    event
}

/// Render the bar of menu titles.
pub fn view_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let titles = MenuKind::ALL.iter().fold(
        Row::new().spacing(spacing::XXS).align_y(Vertical::Center),
        |row, kind| {
            let is_open = ctx.open_menu == Some(*kind);
            row.push(
                button(Text::new(ctx.i18n.tr(kind.title_key())).size(typography::BODY))
                    .on_press(Message::ToggleMenu(*kind))
                    .padding([spacing::XXS, spacing::XS])
                    .width(Length::Fixed(sizing::MENU_TITLE_WIDTH))
                    .style(styles::button::menu_title(is_open)),
            )
        },
    );

    Container::new(titles)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MENU_BAR_HEIGHT))
        .padding([0.0, spacing::XXS])
        .align_y(Vertical::Center)
        .style(styles::container::menu_bar)
        .into()
}

/// Render the open dropdown, positioned under its title. Returns `None`
/// when every menu is closed.
pub fn view_dropdown<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let kind = ctx.open_menu?;

    let entries = match kind {
        MenuKind::File => build_file_menu(ctx),
        MenuKind::Language => build_language_menu(ctx),
        MenuKind::Settings => build_settings_menu(ctx),
        MenuKind::View => build_view_menu(ctx),
        MenuKind::Help => build_help_menu(ctx),
    };

    let dropdown = Container::new(entries.spacing(spacing::XXS))
        .width(Length::Fixed(sizing::MENU_DROPDOWN_WIDTH))
        .padding(spacing::XS)
        .style(styles::container::dropdown);

    let offset = spacing::XXS + kind.position() as f32 * (sizing::MENU_TITLE_WIDTH + spacing::XXS);

    Some(
        Container::new(dropdown)
            .padding(Padding {
                top: sizing::MENU_BAR_HEIGHT,
                left: offset,
                ..Padding::ZERO
            })
            .into(),
    )
}

fn build_file_menu<'a>(ctx: &ViewContext<'a>) -> Column<'a, Message> {
    Column::new()
        .push(build_menu_item(
            ctx.i18n.tr("menu-open-folder"),
            Message::OpenFolder,
        ))
        .push(rule::horizontal(1))
        .push(build_menu_item(ctx.i18n.tr("menu-exit"), Message::Exit))
}

fn build_language_menu<'a>(ctx: &ViewContext<'a>) -> Column<'a, Message> {
    Language::ALL.iter().fold(Column::new(), |column, language| {
        column.push(build_check_item(
            ctx.i18n.tr(language.menu_key()),
            ctx.i18n.language() == *language,
            Message::SelectLanguage(*language),
        ))
    })
}

fn build_settings_menu<'a>(ctx: &ViewContext<'a>) -> Column<'a, Message> {
    let header = Text::new(ctx.i18n.tr("menu-interval")).size(typography::CAPTION);

    let presets = INTERVAL_PRESETS_MS
        .iter()
        .fold(Column::new(), |column, millis| {
            column.push(build_check_item(
                ctx.i18n.tr(preset_label_key(*millis)),
                ctx.interval.is_preset(*millis),
                Message::SelectPresetInterval(*millis),
            ))
        })
        .push(build_menu_item(
            ctx.i18n.tr("menu-interval-custom"),
            Message::OpenCustomInterval,
        ));

    Column::new()
        .push(Container::new(header).padding([spacing::XXS, spacing::XS]))
        .push(Container::new(presets).padding(Padding {
            left: spacing::SM,
            ..Padding::ZERO
        }))
        .push(rule::horizontal(1))
        .push(build_check_item(
            ctx.i18n.tr("menu-include-subfolders"),
            ctx.include_subfolders,
            Message::ToggleIncludeSubfolders,
        ))
}

fn build_view_menu<'a>(ctx: &ViewContext<'a>) -> Column<'a, Message> {
    Column::new()
        .push(build_menu_item(ctx.i18n.tr("menu-zoom-fit"), Message::ZoomFit))
        .push(build_menu_item(
            ctx.i18n.tr("menu-zoom-100"),
            Message::ZoomActualSize,
        ))
        .push(rule::horizontal(1))
        .push(build_menu_item(ctx.i18n.tr("menu-zoom-in"), Message::ZoomIn))
        .push(build_menu_item(ctx.i18n.tr("menu-zoom-out"), Message::ZoomOut))
        .push(rule::horizontal(1))
        .push(build_menu_item(
            ctx.i18n.tr("menu-show-info"),
            Message::ShowInfo,
        ))
}

fn build_help_menu<'a>(ctx: &ViewContext<'a>) -> Column<'a, Message> {
    Column::new().push(build_menu_item(ctx.i18n.tr("menu-about"), Message::ShowAbout))
}

/// Catalog key of a preset's menu label.
fn preset_label_key(millis: u64) -> &'static str {
    match millis {
        1000 => "menu-interval-1s",
        2000 => "menu-interval-2s",
        3000 => "menu-interval-3s",
        5000 => "menu-interval-5s",
        _ => "menu-interval-10s",
    }
}

fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::XS])
        .width(Length::Fill)
        .style(styles::button::menu_item)
        .into()
}

/// Menu entry with a leading check mark column.
fn build_check_item<'a>(label: String, checked: bool, message: Message) -> Element<'a, Message> {
    let mark = if checked { "✓" } else { "" };
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Text::new(mark)
                .size(typography::BODY)
                .width(Length::Fixed(spacing::MD)),
        )
        .push(Text::new(label).size(typography::BODY));

    button(row)
        .on_press(message)
        .padding([spacing::XXS, spacing::XS])
        .width(Length::Fill)
        .style(styles::button::menu_item)
        .into()
}
