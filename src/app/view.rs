// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a menu bar above the image area. Open dropdowns and dialogs
//! are layered on top with a [`Stack`]. In fullscreen the menu bar is hidden.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::slideshow::Slideshow;
use crate::ui::design_tokens::sizing;
use crate::ui::dialogs::{self, Dialog};
use crate::ui::menu_bar::{self, MenuKind, ViewContext as MenuBarViewContext};
use crate::ui::viewer::{self, ViewModel as ViewerViewModel};
use iced::{
    widget::{mouse_area, Column, Container, Space, Stack},
    Element, Length, Padding,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub slideshow: &'a Slideshow,
    pub open_menu: Option<MenuKind>,
    pub dialog: Option<&'a Dialog>,
    pub fullscreen: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let image_area = viewer::view(
        ViewerViewModel {
            image: ctx.slideshow.image(),
            zoom: *ctx.slideshow.zoom(),
            placeholder: ctx.i18n.tr("placeholder-select-folder"),
        },
        Message::ImageAreaPressed,
        Message::ImageWheel,
    );

    let menu_ctx = MenuBarViewContext {
        i18n: ctx.i18n,
        open_menu: ctx.open_menu,
        interval: ctx.slideshow.interval(),
        include_subfolders: ctx.slideshow.include_subfolders(),
    };

    let mut base = Column::new().width(Length::Fill).height(Length::Fill);
    if !ctx.fullscreen {
        base = base.push(menu_bar::view_bar(&menu_ctx).map(Message::MenuBar));
    }
    base = base.push(image_area);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if !ctx.fullscreen {
        if let Some(dropdown) = menu_bar::view_dropdown(&menu_ctx) {
            layers = layers
                .push(dismiss_layer())
                .push(dropdown.map(Message::MenuBar));
        }
    }

    if let Some(dialog) = ctx.dialog {
        layers = layers.push(dialogs::view(dialog).map(Message::Dialog));
    }

    layers.into()
}

/// Transparent layer below the menu bar that closes the open dropdown when
/// clicked.
fn dismiss_layer<'a>() -> Element<'a, Message> {
    let catcher = mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
        .on_press(Message::MenuBar(menu_bar::Message::CloseMenu));

    Container::new(catcher)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: sizing::MENU_BAR_HEIGHT,
            ..Padding::ZERO
        })
        .into()
}
