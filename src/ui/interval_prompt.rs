// SPDX-License-Identifier: MPL-2.0
//! Prompt asking for the slideshow interval.

use crate::domain::playback::interval_bounds;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    InputChanged(String),
    Confirm,
    Cancel,
}

pub fn view<'a>(i18n: &'a I18n, input: &'a str, default_secs: u32) -> Element<'a, Message> {
    let min = interval_bounds::MIN.to_string();
    let max = interval_bounds::MAX.to_string();
    let default = default_secs.to_string();

    let field = text_input(
        &i18n.tr_with_args("slideshow-prompt-placeholder", &[("default", default.as_str())]),
        input,
    )
    .on_input(Message::InputChanged)
    .on_submit(Message::Confirm)
    .padding(spacing::XS)
    .size(typography::BODY_LG)
    .width(Length::Fixed(sizing::PROMPT_INPUT_WIDTH));

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("slideshow-prompt-cancel")))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::button::secondary)
                .on_press(Message::Cancel),
        )
        .push(
            button(Text::new(i18n.tr("slideshow-prompt-start")))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::Confirm),
        );

    let card = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("slideshow-prompt-title")).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr_with_args(
                "slideshow-prompt-message",
                &[("min", min.as_str()), ("max", max.as_str())],
            ))
            .size(typography::BODY),
        )
        .push(field)
        .push(buttons);

    Container::new(
        Container::new(card)
            .padding(spacing::LG)
            .style(styles::container::dialog),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
