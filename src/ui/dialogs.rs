// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs shown over the main window.
//!
//! A dialog captures its text when it is created: switching the language
//! while it is open leaves it unchanged, and the next dialog uses the new
//! language.

use crate::config::{CUSTOM_INTERVAL_MAX_SECS, CUSTOM_INTERVAL_MIN_SECS};
use crate::i18n::fluent::I18n;
use crate::slideshow::{ImageInfo, Interval};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, center, opaque, text_input, Column, Container, Row, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Information,
    Warning,
}

/// An open modal dialog with its already-translated text.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Title, body and a single OK button.
    Notice {
        severity: Severity,
        title: String,
        body: String,
        ok: String,
    },
    /// Numeric prompt for a custom slideshow interval, in seconds.
    IntervalPrompt {
        title: String,
        label: String,
        input: String,
        ok: String,
        cancel: String,
    },
}

impl Dialog {
    fn notice(i18n: &I18n, severity: Severity, title: String, body: String) -> Self {
        Dialog::Notice {
            severity,
            title,
            body,
            ok: i18n.tr("dialog-ok"),
        }
    }

    /// The chosen folder holds no supported image.
    #[must_use]
    pub fn no_images(i18n: &I18n) -> Self {
        Self::notice(
            i18n,
            Severity::Information,
            i18n.tr("msg-no-images-title"),
            i18n.tr("msg-no-images-body"),
        )
    }

    /// Every image in the sequence failed to decode.
    #[must_use]
    pub fn no_viewable_images(i18n: &I18n) -> Self {
        Self::notice(
            i18n,
            Severity::Warning,
            i18n.tr("msg-error-loading-title"),
            i18n.tr("msg-no-viewable-images-body"),
        )
    }

    /// The chosen folder could not be listed.
    #[must_use]
    pub fn scan_failed(i18n: &I18n, details: &str) -> Self {
        let mut args = FluentArgs::new();
        args.set("details", details.to_string());
        Self::notice(
            i18n,
            Severity::Warning,
            i18n.tr("msg-error-loading-title"),
            i18n.tr_with_args("msg-scan-error-body", &args),
        )
    }

    /// The custom interval entry was rejected.
    #[must_use]
    pub fn invalid_interval(i18n: &I18n) -> Self {
        Self::notice(
            i18n,
            Severity::Warning,
            i18n.tr("msg-error-loading-title"),
            i18n.tr("dialog-interval-invalid"),
        )
    }

    /// Prompt prefilled with the current interval.
    #[must_use]
    pub fn interval_prompt(i18n: &I18n, current: Interval) -> Self {
        Dialog::IntervalPrompt {
            title: i18n.tr("dialog-interval-title"),
            label: format!(
                "{} ({CUSTOM_INTERVAL_MIN_SECS} - {CUSTOM_INTERVAL_MAX_SECS})",
                i18n.tr("dialog-interval-label")
            ),
            input: current.seconds_label(),
            ok: i18n.tr("dialog-ok"),
            cancel: i18n.tr("dialog-cancel"),
        }
    }

    #[must_use]
    pub fn image_info(i18n: &I18n, info: &ImageInfo) -> Self {
        let mut lines = vec![format!("{} {}", i18n.tr("info-filename"), info.file_name)];
        if let Some(size) = info.size_label() {
            lines.push(format!("{} {size}", i18n.tr("info-size")));
        }
        if let Some(dimensions) = info.dimensions_label() {
            lines.push(format!("{} {dimensions}", i18n.tr("info-dimensions")));
        }
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            i18n.tr("info-current"),
            info.position_label()
        ));

        Self::notice(
            i18n,
            Severity::Information,
            i18n.tr("info-title"),
            lines.join("\n"),
        )
    }

    #[must_use]
    pub fn about(i18n: &I18n) -> Self {
        let body = [
            i18n.tr("about-title"),
            format!("{} {APP_VERSION}", i18n.tr("about-version")),
            i18n.tr("about-copyright"),
            format!(
                "{}\n{}",
                i18n.tr("about-built-with"),
                i18n.tr("about-language")
            ),
        ]
        .join("\n\n");

        Self::notice(i18n, Severity::Information, i18n.tr("about-title"), body)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Dialog::Notice { title, .. } | Dialog::IntervalPrompt { title, .. } => title,
        }
    }
}

/// Messages emitted by dialogs.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss,
    IntervalInputChanged(String),
    IntervalSubmitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Closed,
    /// The interval prompt was confirmed with this text.
    IntervalEntered(String),
}

/// Process a dialog message. Closing or submitting clears `dialog`.
pub fn update(message: Message, dialog: &mut Option<Dialog>) -> Event {
    match message {
        Message::Dismiss => {
            *dialog = None;
            Event::Closed
        }
        Message::IntervalInputChanged(value) => {
            if let Some(Dialog::IntervalPrompt { input, .. }) = dialog {
                *input = value;
            }
            Event::None
        }
        Message::IntervalSubmitted => match dialog.take() {
            Some(Dialog::IntervalPrompt { input, .. }) => Event::IntervalEntered(input),
            other => {
                *dialog = other;
                Event::None
            }
        },
    }
}

/// Render `dialog` centered on a dimmed backdrop that swallows every click.
pub fn view(dialog: &Dialog) -> Element<'_, Message> {
    let content = match dialog {
        Dialog::Notice {
            severity,
            title,
            body,
            ok,
        } => build_notice(*severity, title, body, ok),
        Dialog::IntervalPrompt {
            title,
            label,
            input,
            ok,
            cancel,
        } => build_interval_prompt(title, label, input, ok, cancel),
    };

    let dialog_box = Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog);

    opaque(
        center(dialog_box)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
}

fn button_label(label: &str) -> Container<'_, Message> {
    Container::new(Text::new(label))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
}

fn build_title(severity: Severity, title: &str) -> Text<'_> {
    let text = Text::new(title).size(typography::TITLE_SM);
    match severity {
        Severity::Information => text,
        Severity::Warning => text.color(palette::WARNING_500),
    }
}

fn build_notice<'a>(
    severity: Severity,
    title: &'a str,
    body: &'a str,
    ok: &'a str,
) -> Element<'a, Message> {
    let ok_button = button(button_label(ok))
        .on_press(Message::Dismiss)
        .width(Length::Fixed(sizing::BUTTON_MIN_WIDTH))
        .style(styles::button::primary);

    Column::new()
        .spacing(spacing::MD)
        .push(build_title(severity, title))
        .push(Text::new(body).size(typography::BODY))
        .push(
            Container::new(ok_button)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        )
        .into()
}

fn build_interval_prompt<'a>(
    title: &'a str,
    label: &'a str,
    input: &'a str,
    ok: &'a str,
    cancel: &'a str,
) -> Element<'a, Message> {
    let field = text_input("", input)
        .on_input(Message::IntervalInputChanged)
        .on_submit(Message::IntervalSubmitted)
        .padding(spacing::XS)
        .size(typography::BODY);

    let buttons = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            button(button_label(cancel))
                .on_press(Message::Dismiss)
                .width(Length::Fixed(sizing::BUTTON_MIN_WIDTH))
                .style(styles::button::secondary),
        )
        .push(
            button(button_label(ok))
                .on_press(Message::IntervalSubmitted)
                .width(Length::Fixed(sizing::BUTTON_MIN_WIDTH))
                .style(styles::button::primary),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(build_title(Severity::Information, title))
        .push(Text::new(label).size(typography::BODY))
        .push(field)
        .push(
            Container::new(buttons)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::Language;

    fn english() -> I18n {
        I18n::with_language(Language::English)
    }

    fn body(dialog: &Dialog) -> &str {
        match dialog {
            Dialog::Notice { body, .. } => body,
            Dialog::IntervalPrompt { .. } => panic!("expected a notice"),
        }
    }

    #[test]
    fn dialogs_render() {
        let i18n = english();
        let notice = Dialog::no_images(&i18n);
        let _element = view(&notice);
        let prompt = Dialog::interval_prompt(&i18n, Interval::default());
        let _element = view(&prompt);
    }

    #[test]
    fn notice_keeps_text_after_language_switch() {
        let mut i18n = english();
        let dialog = Dialog::no_images(&i18n);
        i18n.set_language(Language::Japanese);

        assert_eq!(dialog.title(), "No Images");
        assert_eq!(Dialog::no_images(&i18n).title(), "画像なし");
    }

    #[test]
    fn interval_prompt_is_prefilled() {
        let dialog = Dialog::interval_prompt(&english(), Interval::Custom(2500));
        match dialog {
            Dialog::IntervalPrompt { input, title, .. } => {
                assert_eq!(input, "2.5");
                assert_eq!(title, "Slide Show Interval");
            }
            other => panic!("expected prompt, got {other:?}"),
        }
    }

    #[test]
    fn info_lists_every_known_fact() {
        let info = ImageInfo {
            file_name: "sunset.jpg".into(),
            size_bytes: Some(1_572_864),
            dimensions: Some((1920, 1080)),
            position: 3,
            total: 10,
        };
        let dialog = Dialog::image_info(&english(), &info);

        assert_eq!(
            body(&dialog),
            "Filename: sunset.jpg\n\
             Size: 1.50 MB (1,572,864 bytes)\n\
             Dimensions: 1920 × 1080 px\n\
             \n\
             Current: 3 / 10"
        );
    }

    #[test]
    fn info_skips_unknown_dimensions() {
        let info = ImageInfo {
            file_name: "a.png".into(),
            size_bytes: Some(10),
            dimensions: None,
            position: 1,
            total: 1,
        };
        let dialog = Dialog::image_info(&english(), &info);
        assert!(!body(&dialog).contains("Dimensions"));
    }

    #[test]
    fn about_mentions_version() {
        let dialog = Dialog::about(&english());
        assert!(body(&dialog).contains(APP_VERSION));
        assert!(body(&dialog).contains("Built with Rust + Iced"));
    }

    #[test]
    fn scan_failure_includes_details() {
        let dialog = Dialog::scan_failed(&english(), "permission denied");
        assert!(body(&dialog).ends_with("permission denied"));
    }

    #[test]
    fn input_changes_only_touch_prompt() {
        let mut dialog = Some(Dialog::interval_prompt(&english(), Interval::default()));
        update(Message::IntervalInputChanged("7.5".into()), &mut dialog);

        let event = update(Message::IntervalSubmitted, &mut dialog);

        assert_eq!(event, Event::IntervalEntered("7.5".into()));
        assert!(dialog.is_none());
    }

    #[test]
    fn submit_on_notice_is_ignored() {
        let mut dialog = Some(Dialog::no_images(&english()));
        let event = update(Message::IntervalSubmitted, &mut dialog);
        assert_eq!(event, Event::None);
        assert!(dialog.is_some());

        let event = update(Message::Dismiss, &mut dialog);
        assert_eq!(event, Event::Closed);
        assert!(dialog.is_none());
    }
}
