// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn bordered(background: Color, text_color: Color, border_color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Main action of a screen (start, open).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            shadow: shadow::SM,
            ..bordered(palette::PRIMARY_500, palette::WHITE, palette::PRIMARY_600)
        },
        button::Status::Hovered => button::Style {
            shadow: shadow::MD,
            ..bordered(palette::PRIMARY_400, palette::WHITE, palette::PRIMARY_500)
        },
        button::Status::Disabled => {
            bordered(palette::GRAY_700, palette::GRAY_400, palette::GRAY_400)
        }
    }
}

/// Navigation and secondary actions.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, palette::WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            bordered(background, text_color, palette::GRAY_400)
        }
        button::Status::Hovered => button::Style {
            shadow: shadow::SM,
            ..bordered(background, text_color, palette::PRIMARY_500)
        },
        button::Status::Disabled => bordered(background, palette::GRAY_400, palette::GRAY_400),
    }
}
