// SPDX-License-Identifier: MPL-2.0
//! Windowed viewer: the fitted item, its metadata bar and the navigation bar.

use crate::application::router::ButtonAction;
use crate::domain::media::MediaKind;
use crate::domain::metadata::MetadataPayload;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::picture::{self, Picture};
use crate::ui::{metadata_bar, styles};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navigate(ButtonAction),
    Open,
    Reset,
    /// Only offered by the photo viewer.
    StartSlideshow,
}

/// Everything the viewer needs to draw itself.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub kind: MediaKind,
    pub picture: Option<&'a Picture>,
    pub metadata: Option<&'a MetadataPayload>,
    /// `(index + 1, len)` of the item on screen.
    pub position: Option<(usize, usize)>,
    /// Whether the collection has anything to navigate.
    pub has_items: bool,
    pub metadata_bar_height: u32,
    pub navigation_bar_height: u32,
}

/// Text of the "Image 3 of 10" counter.
#[must_use]
pub fn count_label(i18n: &I18n, kind: MediaKind, position: Option<(usize, usize)>) -> String {
    let (count_key, empty_key) = match kind {
        MediaKind::Image => ("image-count", "image-count-empty"),
        MediaKind::Video => ("video-count", "video-count-empty"),
    };
    let Some((current, total)) = position else {
        return i18n.tr(empty_key);
    };
    let (current, total) = (current.to_string(), total.to_string());
    i18n.tr_with_args(count_key, &[("current", current.as_str()), ("total", total.as_str())])
}

#[allow(clippy::cast_precision_loss)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let (empty_key, no_info_key) = match ctx.kind {
        MediaKind::Image => ("image-count-empty", "metadata-empty"),
        MediaKind::Video => ("video-count-empty", "video-metadata-empty"),
    };

    let metadata = Container::new(metadata_bar::view(ctx.metadata, i18n.tr(no_info_key)))
        .width(Length::Fill)
        .height(Length::Fixed(ctx.metadata_bar_height as f32))
        .padding(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::bar);

    let has_items = ctx.has_items;
    let nav_button = |key: &str, action: ButtonAction| {
        button(Text::new(i18n.tr(key)))
            .padding([spacing::XXS, spacing::MD])
            .style(styles::button::secondary)
            .on_press_maybe(has_items.then_some(Message::Navigate(action)))
    };

    let mut actions = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            button(Text::new(i18n.tr("button-open")))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::Open),
        )
        .push(
            button(Text::new(i18n.tr("button-reset")))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::button::secondary)
                .on_press(Message::Reset),
        );
    if ctx.kind == MediaKind::Image {
        actions = actions.push(
            button(Text::new(i18n.tr("button-slideshow")))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::button::secondary)
                .on_press_maybe(has_items.then_some(Message::StartSlideshow)),
        );
    }

    let navigation = Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .push(actions)
        .push(Space::new().width(Length::Fill))
        .push(nav_button("button-back", ButtonAction::Back))
        .push(nav_button("button-home", ButtonAction::Home))
        .push(nav_button("button-forward", ButtonAction::Forward))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(count_label(i18n, ctx.kind, ctx.position)).size(typography::BODY));

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture::view(ctx.picture, i18n.tr(empty_key)))
        .push(metadata)
        .push(
            Container::new(navigation)
                .width(Length::Fill)
                .height(Length::Fixed(ctx.navigation_bar_height as f32))
                .align_y(alignment::Vertical::Center)
                .style(styles::container::bar),
        )
        .into()
}
