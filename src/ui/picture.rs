// SPDX-License-Identifier: MPL-2.0
//! The displayed bitmap.

use crate::ui::design_tokens::{palette, typography};
use iced::widget::{image, Container, Image, Text};
use iced::{alignment, Element, Length};

/// A rendered bitmap with its size in pixels.
///
/// The bitmap is already fitted to the viewport, so it is drawn at its
/// natural size and centered.
#[derive(Debug, Clone)]
pub struct Picture {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Centers the picture in the remaining space, or shows `placeholder`.
pub fn view<'a, M: 'a>(picture: Option<&'a Picture>, placeholder: String) -> Element<'a, M> {
    let content: Element<'a, M> = match picture {
        #[allow(clippy::cast_precision_loss)]
        Some(picture) => Image::new(picture.handle.clone())
            .width(Length::Fixed(picture.width as f32))
            .height(Length::Fixed(picture.height as f32))
            .into(),
        None => Text::new(placeholder)
            .size(typography::TITLE_MD)
            .color(palette::GRAY_400)
            .into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
