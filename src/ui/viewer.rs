// SPDX-License-Identifier: MPL-2.0
//! Image area: the current image on a black surface, or a placeholder when
//! nothing is loaded.
//!
//! The image is centered while it is smaller than the area and becomes
//! scrollable once the zoom makes it larger.

use crate::media::ImageData;
use crate::ui::design_tokens::typography;
use crate::ui::state::ZoomState;
use crate::ui::styles;
use crate::ui::widgets::wheel_zoom;
use iced::widget::{
    center, image, mouse_area, responsive,
    scrollable::{Direction, Scrollbar},
    Container, Scrollable, Text,
};
use iced::{ContentFit, Element, Length, Padding, Size};

pub struct ViewModel<'a> {
    pub image: Option<&'a ImageData>,
    pub zoom: ZoomState,
    /// Shown when `image` is `None`.
    pub placeholder: String,
}

/// Renders the image area. `on_press` is emitted for every left click on
/// the area and `on_wheel` for wheel motion over it.
pub fn view<'a, Message>(
    model: ViewModel<'a>,
    on_press: Message,
    on_wheel: fn(f32) -> Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let surface: Element<'a, Message> = match model.image {
        Some(image_data) => {
            let zoom = model.zoom;
            responsive(move |available| view_image(image_data, zoom, available)).into()
        }
        None => center(Text::new(model.placeholder).size(typography::BODY_LG)).into(),
    };

    let area = Container::new(wheel_zoom(surface, on_wheel))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::image_area);

    mouse_area(area).on_press(on_press).into()
}

fn view_image<'a, Message: 'a>(
    image_data: &'a ImageData,
    zoom: ZoomState,
    available: Size,
) -> Element<'a, Message> {
    let (width, height) = image_data.dimensions();
    let presented = zoom.presented_size(Size::new(width as f32, height as f32), available);

    let picture = image::Image::new(image_data.handle.clone())
        .width(Length::Fixed(presented.width))
        .height(Length::Fixed(presented.height))
        .content_fit(ContentFit::Fill);

    let padded = Container::new(picture).padding(centering_padding(presented, available));

    Scrollable::new(padded)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::default(),
            horizontal: Scrollbar::default(),
        })
        .into()
}

/// Padding that centers `content` inside `available` along each axis where
/// it fits.
fn centering_padding(content: Size, available: Size) -> Padding {
    let horizontal = ((available.width - content.width) / 2.0).max(0.0);
    let vertical = ((available.height - content.height) / 2.0).max(0.0);

    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}
