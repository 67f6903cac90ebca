// SPDX-License-Identifier: MPL-2.0
//! Fullscreen slideshow: the slide on a black backdrop with its metadata.

use crate::domain::metadata::MetadataPayload;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::picture::{self, Picture};
use crate::ui::{metadata_bar, styles};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub picture: Option<&'a Picture>,
    pub metadata: Option<&'a MetadataPayload>,
    /// Height kept free under the slide for its metadata.
    pub reserved_height: u32,
}

#[allow(clippy::cast_precision_loss)]
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let footer = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(metadata_bar::view(ctx.metadata, String::new()))
        .push(
            Text::new(ctx.i18n.tr("slideshow-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture::view(ctx.picture, String::new()))
        .push(
            Container::new(footer)
                .width(Length::Fill)
                .height(Length::Fixed(ctx.reserved_height as f32))
                .padding(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}
