// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_200, GRAY_900},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Strip holding the menu titles.
pub fn menu_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        ..Default::default()
    }
}

/// Open dropdown below a menu title.
pub fn dropdown(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Black surface behind the image.
pub fn image_area(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(GRAY_200),
        ..Default::default()
    }
}

/// Dimmed layer covering the window while a dialog is open.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Dialog box.
pub fn dialog(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..GRAY_900
            },
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
